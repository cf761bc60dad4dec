//! Field paths addressing the location of a violation
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use serde::{Serialize, Serializer};
use std::fmt;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named child field: `.spec`
    Field(String),
    /// List element: `[2]`
    Index(usize),
    /// Map entry: `[app.kubernetes.io/name]`
    Key(String),
}

/// Locator of a field inside the object under validation
///
/// Paths are built by extension and never mutated in place, so a parent path
/// can be shared by all of its children:
///
/// ```rust
/// use netguard_validation::FieldPath;
///
/// let ports = FieldPath::new("spec").child("ingressPorts");
/// assert_eq!(ports.index(2).child("port").to_string(), "spec.ingressPorts[2].port");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The path of the object itself
    pub fn root() -> Self {
        Self::default()
    }

    /// A path with a single top-level field
    pub fn new(field: impl Into<String>) -> Self {
        Self::root().child(field)
    }

    /// Parse a dotted path such as `spec.addressGroupRef`
    pub fn from_dotted(path: &str) -> Self {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .fold(Self::root(), |acc, segment| acc.child(segment))
    }

    /// Create a child path for a named field
    pub fn child(&self, field: impl Into<String>) -> Self {
        self.extended(PathSegment::Field(field.into()))
    }

    /// Create a child path for a list element
    pub fn index(&self, index: usize) -> Self {
        self.extended(PathSegment::Index(index))
    }

    /// Create a child path for a map entry
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.extended(PathSegment::Key(key.into()))
    }

    /// Append every segment of `other` to this path
    pub fn join(&self, other: &FieldPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    fn extended(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
            }
        }

        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_paths() {
        let path = FieldPath::new("spec");
        assert_eq!(path.to_string(), "spec");

        let nested = path.child("addressGroupRef").child("name");
        assert_eq!(nested.to_string(), "spec.addressGroupRef.name");
    }

    #[test]
    fn test_index_and_key_paths() {
        let path = FieldPath::new("spec").child("ports").index(0).child("portRange");
        assert_eq!(path.to_string(), "spec.ports[0].portRange");

        let label = FieldPath::new("metadata").child("labels").key("app");
        assert_eq!(label.to_string(), "metadata.labels[app]");
    }

    #[test]
    fn test_root_path() {
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().to_string(), "<root>");
        assert_eq!(FieldPath::root().index(1).to_string(), "[1]");
    }

    #[test]
    fn test_from_dotted_and_join() {
        let path = FieldPath::from_dotted("spec.transport");
        assert_eq!(path, FieldPath::new("spec").child("transport"));

        let joined = FieldPath::new("metadata").join(&FieldPath::from_dotted("name"));
        assert_eq!(joined.to_string(), "metadata.name");
    }

    #[test]
    fn test_parent_unchanged_by_extension() {
        let parent = FieldPath::new("spec");
        let _child = parent.child("cidr");
        assert_eq!(parent.to_string(), "spec");
    }

    #[test]
    fn test_serializes_as_string() {
        let path = FieldPath::new("spec").child("ports").index(3);
        assert_eq!(serde_json::to_value(&path).unwrap(), "spec.ports[3]");
    }
}
