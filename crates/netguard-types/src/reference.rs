//! Typed references between resources
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// A typed pointer to another resource in the same namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectReference {
    /// Schema identifier of the referenced object
    pub api_version: String,
    /// Kind of the referenced object
    pub kind: String,
    /// Name of the referenced object
    pub name: String,
}

impl ObjectReference {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Extend this reference with a namespace
    pub fn in_namespace(self, namespace: impl Into<String>) -> NamespacedObjectReference {
        NamespacedObjectReference {
            object_ref: self,
            namespace: namespace.into(),
        }
    }
}

/// A typed pointer to another resource, possibly in another namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespacedObjectReference {
    #[serde(flatten)]
    pub object_ref: ObjectReference,
    /// Namespace of the referenced object
    pub namespace: String,
}

impl NamespacedObjectReference {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        ObjectReference::new(api_version, kind, name).in_namespace(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_reference_flattens_on_the_wire() {
        let reference = NamespacedObjectReference::new("v1", "AddressGroup", "ag", "prod");
        let value = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "AddressGroup",
                "name": "ag",
                "namespace": "prod"
            })
        );

        let parsed: NamespacedObjectReference = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, reference);
    }

    #[test]
    fn test_structural_equality() {
        let a = ObjectReference::new("v1", "Service", "web");
        let b = ObjectReference::new("v1", "Service", "web");
        assert_eq!(a, b);
        assert_ne!(a.clone().in_namespace("x"), b.in_namespace("y"));
    }
}
