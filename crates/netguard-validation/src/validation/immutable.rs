//! Declarative immutable-field lists
//!
//! Each resource validator declares the fields that may not change after
//! creation as a static list of [`ImmutableField`] entries. Update
//! validation diffs old and new against that list.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::path::FieldPath;

/// A field that is fixed once the object exists
pub struct ImmutableField<T> {
    /// Dotted path of the field, relative to the object being diffed
    pub path: &'static str,
    /// Returns true when the field differs between new and old
    pub differs: fn(&T, &T) -> bool,
}

impl<T> std::fmt::Debug for ImmutableField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableField").field("path", &self.path).finish()
    }
}

/// Declare an [`ImmutableField`] from a dotted path and the matching field access
///
/// ```
/// use netguard_types::Network;
/// use netguard_validation::{immutable_field, ImmutableField};
///
/// const FIELDS: &[ImmutableField<Network>] = &[immutable_field!("spec.CIDR" => spec.cidr)];
/// assert_eq!(FIELDS[0].path, "spec.CIDR");
/// ```
#[macro_export]
macro_rules! immutable_field {
    ($path:literal => $($field:ident).+) => {
        $crate::ImmutableField {
            path: $path,
            differs: |new, old| new.$($field).+ != old.$($field).+,
        }
    };
}

/// Report a `Forbidden` error for every declared field that changed
pub fn diff_immutable<T>(
    fields: &[ImmutableField<T>],
    new: &T,
    old: &T,
    base: &FieldPath,
) -> FieldErrorList {
    fields
        .iter()
        .filter(|field| (field.differs)(new, old))
        .map(|field| {
            FieldError::forbidden(
                base.join(&FieldPath::from_dotted(field.path)),
                "field is immutable",
            )
        })
        .collect()
}
