//! Object metadata shared by every resource kind
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard object metadata
///
/// Labels and annotations are kept in ordered maps so that validation walks
/// them in a stable order and reports violations deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Object name, unique within its namespace
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Prefix used by the server to generate a unique name when `name` is empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub generate_name: String,

    /// Namespace the object lives in
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Identifying key/value pairs
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Non-identifying key/value pairs
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Metadata for a named object in a namespace
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Metadata for an object whose name the server generates from a prefix
    pub fn generated(namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            generate_name: prefix.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Add a label
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add an annotation
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// The name to use in log output: `name`, or `generateName` with a marker
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            self.name.clone()
        } else if !self.generate_name.is_empty() {
            format!("{}<generated>", self.generate_name)
        } else {
            "<unnamed>".to_string()
        }
    }
}
