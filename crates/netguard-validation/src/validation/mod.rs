//! Validation primitives shared by every resource validator
//!
//! This module holds the building blocks the per-kind validators are made of:
//!
//! - **Field errors**: structured violations accumulated in discovery order
//! - **Primitive validators**: names, label grammar, enums, ports, network prefixes
//! - **References**: typed pointers to other resources
//! - **Resource contract**: create, update and delete validation with
//!   declarative immutable fields
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod duplicates;
pub mod enums;
pub mod error;
pub mod immutable;
pub mod metadata;
pub mod naming;
pub mod network;
pub mod path;
pub mod reference;

// Re-export commonly used types
pub use base::{ResourceValidator, ValidationContext};
pub use error::{ErrorKind, FieldError, FieldErrorList};
pub use immutable::{diff_immutable, ImmutableField};
pub use network::PortTextError;
pub use path::{FieldPath, PathSegment};

use netguard_types::GROUP_VERSION;
use serde::{Deserialize, Serialize};

/// Default ceiling for a single annotation value, in bytes
pub const DEFAULT_MAX_ANNOTATION_VALUE_BYTES: usize = 256 * 1024;

/// Annotation prefix exempt from the size ceiling by default
pub const DEFAULT_PRIVILEGED_ANNOTATION_PREFIX: &str = "kubectl.kubernetes.io/";

/// Validation configuration
///
/// Deserializable so it can be embedded in a configuration file; every field
/// falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Schema identifier every reference must carry
    pub api_version: String,
    /// Maximum size of a non-privileged annotation value
    pub max_annotation_value_bytes: usize,
    /// Annotation key prefixes exempt from the size ceiling
    pub privileged_annotation_prefixes: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            api_version: GROUP_VERSION.to_string(),
            max_annotation_value_bytes: DEFAULT_MAX_ANNOTATION_VALUE_BYTES,
            privileged_annotation_prefixes: vec![DEFAULT_PRIVILEGED_ANNOTATION_PREFIX.to_string()],
        }
    }
}

impl ValidationConfig {
    /// Set the schema identifier references must carry
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the annotation value ceiling
    pub fn with_max_annotation_value_bytes(mut self, max: usize) -> Self {
        self.max_annotation_value_bytes = max;
        self
    }

    /// Exempt another annotation prefix from the size ceiling
    pub fn with_privileged_annotation_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.privileged_annotation_prefixes.contains(&prefix) {
            self.privileged_annotation_prefixes.push(prefix);
        }
        self
    }
}
