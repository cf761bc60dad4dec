//! Validation of typed references between resources
//!
//! Every cross-resource pointer goes through these two functions, so a wrong
//! schema, a wrong kind or a malformed name produces the same error shape no
//! matter which resource holds the reference.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationContext;
use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::naming::validate_name;
use crate::validation::path::FieldPath;
use netguard_types::{NamespacedObjectReference, ObjectReference, ResourceKind};

/// Validate a reference against the supported schema and an expected kind
///
/// The schema, kind and name checks are independent: each missing or wrong
/// field contributes its own error.
pub fn validate_object_reference(
    ctx: &ValidationContext,
    reference: &ObjectReference,
    expected: ResourceKind,
    path: &FieldPath,
) -> FieldErrorList {
    let mut errors = FieldErrorList::new();

    let api_version_path = path.child("apiVersion");
    if reference.api_version.is_empty() {
        errors.push(FieldError::required(api_version_path, ""));
    } else if reference.api_version != ctx.api_version() {
        errors.push(FieldError::invalid(
            api_version_path,
            reference.api_version.as_str(),
            format!("must be {}", ctx.api_version()),
        ));
    }

    let kind_path = path.child("kind");
    if reference.kind.is_empty() {
        errors.push(FieldError::required(kind_path, ""));
    } else if reference.kind != expected.as_str() {
        errors.push(FieldError::invalid(
            kind_path,
            reference.kind.as_str(),
            format!("must be {}", expected),
        ));
    }

    let name_path = path.child("name");
    if reference.name.is_empty() {
        errors.push(FieldError::required(name_path, ""));
    } else {
        errors.append(validate_name(&reference.name, &name_path));
    }

    errors
}

/// Validate a namespaced reference; the namespace must be set and well-formed
pub fn validate_namespaced_object_reference(
    ctx: &ValidationContext,
    reference: &NamespacedObjectReference,
    expected: ResourceKind,
    path: &FieldPath,
) -> FieldErrorList {
    let mut errors = validate_object_reference(ctx, &reference.object_ref, expected, path);

    let namespace_path = path.child("namespace");
    if reference.namespace.is_empty() {
        errors.push(FieldError::required(namespace_path, ""));
    } else {
        errors.append(validate_name(&reference.namespace, &namespace_path));
    }

    errors
}
