//! Object metadata validation
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationContext;
use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::immutable::{diff_immutable, ImmutableField};
use crate::validation::naming::{
    validate_generate_name_prefix, validate_label_value, validate_length, validate_name,
    validate_qualified_name,
};
use crate::validation::path::FieldPath;
use netguard_types::ObjectMeta;

/// Metadata fields that no resource may change on update
pub const METADATA_IMMUTABLE_FIELDS: &[ImmutableField<ObjectMeta>] = &[
    crate::immutable_field!("name" => name),
    crate::immutable_field!("namespace" => namespace),
];

/// Validate the metadata of a new or updated object
///
/// Exactly one of `name` and `generateName` must be set. Namespaced kinds
/// require a well-formed namespace; cluster-scoped kinds must not carry one.
pub fn validate_object_meta(
    ctx: &ValidationContext,
    meta: &ObjectMeta,
    namespaced: bool,
    path: &FieldPath,
) -> FieldErrorList {
    let mut errors = FieldErrorList::new();
    let name_path = path.child("name");
    let generate_name_path = path.child("generateName");

    match (meta.name.is_empty(), meta.generate_name.is_empty()) {
        (true, true) => {
            errors.push(FieldError::required(name_path, "name or generateName is required"));
        }
        (false, true) => errors.append(validate_name(&meta.name, &name_path)),
        (true, false) => errors.append(validate_generate_name_prefix(
            &meta.generate_name,
            &generate_name_path,
        )),
        (false, false) => {
            errors.append(validate_name(&meta.name, &name_path));
            errors.append(validate_generate_name_prefix(
                &meta.generate_name,
                &generate_name_path,
            ));
            errors.push(FieldError::forbidden(
                generate_name_path,
                "may not be set together with name",
            ));
        }
    }

    let namespace_path = path.child("namespace");
    if namespaced {
        if meta.namespace.is_empty() {
            errors.push(FieldError::required(namespace_path, ""));
        } else {
            errors.append(validate_name(&meta.namespace, &namespace_path));
        }
    } else if !meta.namespace.is_empty() {
        errors.push(FieldError::forbidden(
            namespace_path,
            "not allowed on this type",
        ));
    }

    let labels_path = path.child("labels");
    for (key, value) in &meta.labels {
        let entry_path = labels_path.key(key.as_str());
        errors.append(validate_qualified_name(key, &entry_path));
        errors.append(validate_label_value(value, &entry_path));
    }

    let annotations_path = path.child("annotations");
    for (key, value) in &meta.annotations {
        let entry_path = annotations_path.key(key.as_str());
        errors.append(validate_qualified_name(key, &entry_path));
        if !ctx.is_privileged_annotation(key) {
            errors.append(validate_length(
                value,
                &entry_path,
                ctx.config().max_annotation_value_bytes,
            ));
        }
    }

    errors
}

/// Name and namespace are fixed once the object exists
pub fn validate_object_meta_update(
    new: &ObjectMeta,
    old: &ObjectMeta,
    path: &FieldPath,
) -> FieldErrorList {
    diff_immutable(METADATA_IMMUTABLE_FIELDS, new, old, path)
}
