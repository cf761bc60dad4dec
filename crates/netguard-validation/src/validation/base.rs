//! Validation context and the per-kind validator contract
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::immutable::{diff_immutable, ImmutableField};
use crate::validation::metadata::{validate_object_meta, validate_object_meta_update};
use crate::validation::path::FieldPath;
use crate::validation::ValidationConfig;
use netguard_types::Resource;
use tracing::debug;

/// Read-only settings shared by every validator during one call
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    config: ValidationConfig,
}

impl ValidationContext {
    /// Create a context from configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// The schema identifier every reference must carry
    pub fn api_version(&self) -> &str {
        &self.config.api_version
    }

    /// Whether an annotation key is exempt from the value size ceiling
    pub fn is_privileged_annotation(&self, key: &str) -> bool {
        self.config
            .privileged_annotation_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_str()))
    }
}

/// Create, update and delete validation for one resource kind
///
/// Implementors supply the kind-specific spec checks and the list of fields
/// that are fixed after creation; metadata checks, immutability diffing and
/// nil handling come from the provided methods.
pub trait ResourceValidator {
    /// The resource type being validated
    type Object: Resource + 'static;

    /// Spec fields that may not change on update, as paths from the object root
    const IMMUTABLE_FIELDS: &'static [ImmutableField<Self::Object>];

    /// Kind-specific checks, rooted at `path` (the object's `spec`)
    fn validate_spec(
        &self,
        ctx: &ValidationContext,
        obj: &Self::Object,
        path: &FieldPath,
    ) -> FieldErrorList;

    /// Validate an object about to be created
    ///
    /// A missing object yields a single `Required` error at the root and
    /// nothing else.
    fn validate_create(&self, ctx: &ValidationContext, obj: Option<&Self::Object>) -> FieldErrorList {
        let errors = match obj {
            Some(obj) => validate_object(self, ctx, obj),
            None => missing_object(),
        };
        let kind = <Self::Object as Resource>::KIND;
        debug!(
            kind = %kind,
            name = %obj.map(|o| o.metadata().display_name()).unwrap_or_default(),
            errors = errors.len(),
            "validated create"
        );
        errors
    }

    /// Validate an object about to replace `old`
    ///
    /// Runs every create check against `obj`, then reports each immutable
    /// field that differs from `old`.
    fn validate_update(
        &self,
        ctx: &ValidationContext,
        obj: Option<&Self::Object>,
        old: &Self::Object,
    ) -> FieldErrorList {
        let errors = match obj {
            Some(obj) => {
                let mut errors = validate_object(self, ctx, obj);
                errors.append(validate_object_meta_update(
                    obj.metadata(),
                    old.metadata(),
                    &FieldPath::new("metadata"),
                ));
                errors.append(diff_immutable(
                    Self::IMMUTABLE_FIELDS,
                    obj,
                    old,
                    &FieldPath::root(),
                ));
                errors
            }
            None => missing_object(),
        };
        let kind = <Self::Object as Resource>::KIND;
        debug!(
            kind = %kind,
            name = %old.metadata().display_name(),
            errors = errors.len(),
            "validated update"
        );
        errors
    }

    /// Validate an object about to be removed
    ///
    /// No kind has deletion-time constraints of its own; referential checks
    /// belong to the storage layer.
    fn validate_delete(&self, _ctx: &ValidationContext, obj: Option<&Self::Object>) -> FieldErrorList {
        let kind = <Self::Object as Resource>::KIND;
        debug!(
            kind = %kind,
            name = %obj.map(|o| o.metadata().display_name()).unwrap_or_default(),
            "validated delete"
        );
        FieldErrorList::new()
    }
}

fn validate_object<V>(validator: &V, ctx: &ValidationContext, obj: &V::Object) -> FieldErrorList
where
    V: ResourceValidator + ?Sized,
{
    let mut errors = validate_object_meta(
        ctx,
        obj.metadata(),
        <V::Object as Resource>::NAMESPACED,
        &FieldPath::new("metadata"),
    );
    errors.append(validator.validate_spec(ctx, obj, &FieldPath::new("spec")));
    errors
}

fn missing_object() -> FieldErrorList {
    FieldErrorList::from(FieldError::required(FieldPath::root(), "object must not be nil"))
}
