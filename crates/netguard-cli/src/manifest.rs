//! Manifest loading
//!
//! Reads resource manifests from a file or stdin. YAML input may hold several
//! `---` separated documents; JSON input may be a single object or an array.
//! A `List` document is flattened into its `items`. Each document is decoded
//! on its own: one that is not a known resource carries its violations instead
//! of failing the whole source.

use crate::error::{Error, Result};
use netguard_types::{AnyResource, ResourceKind};
use netguard_validation::{FieldError, FieldErrorList, FieldPath};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// One resource document, decoded on its own
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Position of the document in its source, starting at 0
    pub index: usize,
    /// The `apiVersion` the document declared, empty when absent
    pub api_version: String,
    /// The declared kind, when it names a known resource
    pub kind: Option<ResourceKind>,
    /// The declared object name, for reporting
    pub name: String,
    /// The typed resource, or the violations that kept it from decoding
    pub resource: std::result::Result<AnyResource, FieldErrorList>,
}

impl Manifest {
    /// Identity used to pair a new object with its persisted version
    ///
    /// Documents that did not decode or carry no `name` have no identity.
    pub fn key(&self) -> Option<ManifestKey> {
        let resource = self.resource.as_ref().ok()?;
        let meta = resource.metadata();
        if meta.name.is_empty() {
            return None;
        }
        Some((resource.kind(), meta.namespace.clone(), meta.name.clone()))
    }
}

/// Kind, namespace and name of a manifest
pub type ManifestKey = (ResourceKind, String, String);

/// Load every manifest from `path`, or from stdin when `path` is `-`
pub fn load_manifests(path: &Path) -> Result<Vec<Manifest>> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        std::fs::read_to_string(path)?
    };

    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let documents = if is_json {
        json_documents(&content, path)?
    } else {
        yaml_documents(&content, path)?
    };
    debug!(path = %path.display(), documents = documents.len(), "Read manifest documents");

    Ok(documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| decode_manifest(index, document))
        .collect())
}

fn json_documents(content: &str, path: &Path) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content).map_err(|_| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: "JSON".to_string(),
    })?;

    Ok(match value {
        Value::Array(items) => items.into_iter().flat_map(flatten_list).collect(),
        value => flatten_list(value),
    })
}

fn yaml_documents(content: &str, path: &Path) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document).map_err(|_| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })?;
        documents.extend(flatten_list(value));
    }
    Ok(documents)
}

/// Expand `kind: List` documents and drop empty ones
fn flatten_list(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Object(mut map) if map.get("kind").and_then(Value::as_str) == Some("List") => {
            match map.remove("items") {
                Some(Value::Array(items)) => items.into_iter().filter(|item| !item.is_null()).collect(),
                _ => Vec::new(),
            }
        }
        value => vec![value],
    }
}

fn decode_manifest(index: usize, document: Value) -> Manifest {
    let api_version = document
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let name = document
        .pointer("/metadata/name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let (kind, resource) = match decode_kind(&document) {
        Ok(kind) => (Some(kind), decode_resource(index, kind, document)),
        Err(error) => (None, Err(FieldErrorList::from(error))),
    };

    Manifest {
        index,
        api_version,
        kind,
        name,
        resource,
    }
}

fn decode_resource(
    index: usize,
    kind: ResourceKind,
    document: Value,
) -> std::result::Result<AnyResource, FieldErrorList> {
    match serde_json::from_value::<AnyResource>(document) {
        Ok(resource) => {
            trace!(index, kind = %kind, name = %resource.metadata().display_name(), "Decoded manifest");
            Ok(resource)
        }
        Err(e) => {
            debug!(index, kind = %kind, error = %e, "Manifest did not decode");
            Err(FieldErrorList::from(FieldError::invalid(
                FieldPath::root(),
                kind.as_str(),
                format!("cannot decode {}: {}", kind, e),
            )))
        }
    }
}

fn decode_kind(document: &Value) -> std::result::Result<ResourceKind, FieldError> {
    let object = document.as_object().ok_or_else(|| {
        FieldError::invalid(FieldPath::root(), json_type(document), "document must be a mapping")
    })?;

    let path = FieldPath::new("kind");
    match object.get("kind") {
        None => Err(FieldError::required(path, "")),
        Some(Value::String(kind)) if kind.is_empty() => Err(FieldError::required(path, "")),
        Some(Value::String(kind)) => kind.parse::<ResourceKind>().map_err(|_| {
            let supported: Vec<&str> = ResourceKind::ALL.iter().map(ResourceKind::as_str).collect();
            FieldError::not_supported(path, kind.as_str(), &supported)
        }),
        Some(other) => Err(FieldError::invalid(path, other.clone(), "must be a string")),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Match each new manifest with the old manifest of the same identity
pub fn pair_with_old(manifests: &[Manifest], old: Vec<Manifest>) -> Vec<Option<AnyResource>> {
    let mut by_key: HashMap<ManifestKey, AnyResource> = old
        .into_iter()
        .filter_map(|manifest| {
            let key = manifest.key()?;
            manifest.resource.ok().map(|resource| (key, resource))
        })
        .collect();

    manifests
        .iter()
        .map(|manifest| {
            let paired = manifest.key().and_then(|key| by_key.remove(&key));
            if paired.is_none() {
                debug!(index = manifest.index, kind = ?manifest.kind, "No persisted version found");
            }
            paired
        })
        .collect()
}

/// Display label for a manifest source
pub fn source_label(path: &Path) -> PathBuf {
    if path == Path::new(STDIN_PATH) {
        PathBuf::from("<stdin>")
    } else {
        path.to_path_buf()
    }
}
