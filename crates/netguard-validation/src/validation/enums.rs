//! Closed-set string value checks
//!
//! Comparison is exact and case-sensitive. Callers must not case-fold values
//! before validating them.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::path::FieldPath;

/// Validate an optional enumerated value
///
/// An empty value passes; whether the field must be set is a separate check
/// (see [`validate_required_enum`]).
pub fn validate_enum(value: &str, allowed: &[&str], path: &FieldPath) -> FieldErrorList {
    if value.is_empty() || allowed.contains(&value) {
        FieldErrorList::new()
    } else {
        FieldErrorList::from(FieldError::not_supported(path.clone(), value, allowed))
    }
}

/// Validate an enumerated value that must be set
pub fn validate_required_enum(value: &str, allowed: &[&str], path: &FieldPath) -> FieldErrorList {
    if value.is_empty() {
        FieldErrorList::from(FieldError::required(path.clone(), ""))
    } else {
        validate_enum(value, allowed, path)
    }
}
