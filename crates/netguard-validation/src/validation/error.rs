//! Field-error model: structured violation records and their ordered list
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::path::FieldPath;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Category of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A mandatory field or sub-structure is absent
    Required,
    /// A value is present but malformed, out of range, or points at the wrong schema/kind
    Invalid,
    /// A value lies outside a closed enumeration
    NotSupported,
    /// A value exceeds a length ceiling
    TooLong,
    /// A uniqueness constraint among list elements was violated
    Duplicate,
    /// A value is well-formed but disallowed by policy
    Forbidden,
}

impl ErrorKind {
    /// Prefix used when rendering a message of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "Required value",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::NotSupported => "Unsupported value",
            ErrorKind::TooLong => "Too long",
            ErrorKind::Duplicate => "Duplicate value",
            ErrorKind::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation at a field path
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Where the violation occurred
    pub path: FieldPath,
    /// What kind of violation it is
    pub kind: ErrorKind,
    /// The offending value, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_value: Option<Value>,
    /// Rendered message, shaped by the kind
    pub message: String,
    /// The closed set a `NotSupported` value was checked against
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_values: Vec<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl FieldError {
    fn build(path: FieldPath, kind: ErrorKind, invalid_value: Option<Value>, message: String) -> Self {
        tracing::trace!(path = %path, kind = ?kind, "field violation");
        Self {
            path,
            kind,
            invalid_value,
            message,
            supported_values: Vec::new(),
        }
    }

    /// A mandatory field is missing
    pub fn required(path: FieldPath, detail: impl Into<String>) -> Self {
        let message = with_detail(ErrorKind::Required.as_str().to_string(), &detail.into());
        Self::build(path, ErrorKind::Required, None, message)
    }

    /// A value is malformed
    pub fn invalid(path: FieldPath, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        let value = value.into();
        let message = with_detail(format!("{}: {}", ErrorKind::Invalid, value), &detail.into());
        Self::build(path, ErrorKind::Invalid, Some(value), message)
    }

    /// A value is not one of the supported values
    pub fn not_supported(path: FieldPath, value: impl Into<Value>, supported: &[&str]) -> Self {
        let value = value.into();
        let quoted = supported
            .iter()
            .map(|s| format!("\"{}\"", s))
            .collect::<Vec<_>>()
            .join(", ");
        let message = format!(
            "{}: {}: supported values: {}",
            ErrorKind::NotSupported,
            value,
            quoted
        );

        let mut error = Self::build(path, ErrorKind::NotSupported, Some(value), message);
        error.supported_values = supported.iter().map(|s| s.to_string()).collect();
        error
    }

    /// A value is longer than `max` bytes
    pub fn too_long(path: FieldPath, value: impl Into<Value>, max: usize) -> Self {
        let message = format!("{}: may not be more than {} bytes", ErrorKind::TooLong, max);
        Self::build(path, ErrorKind::TooLong, Some(value.into()), message)
    }

    /// A list element repeats an earlier one
    pub fn duplicate(path: FieldPath, detail: impl Into<String>) -> Self {
        let message = with_detail(ErrorKind::Duplicate.as_str().to_string(), &detail.into());
        Self::build(path, ErrorKind::Duplicate, None, message)
    }

    /// A value is disallowed by policy
    pub fn forbidden(path: FieldPath, detail: impl Into<String>) -> Self {
        let message = with_detail(ErrorKind::Forbidden.as_str().to_string(), &detail.into());
        Self::build(path, ErrorKind::Forbidden, None, message)
    }
}

fn with_detail(mut message: String, detail: &str) -> String {
    if !detail.is_empty() {
        message.push_str(": ");
        message.push_str(detail);
    }
    message
}

/// Ordered list of violations, in discovery order
///
/// Duplicates are kept: two checks reporting the same thing produce two
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Error, Serialize)]
#[serde(transparent)]
pub struct FieldErrorList {
    errors: Vec<FieldError>,
}

impl fmt::Display for FieldErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => Ok(()),
            [single] => write!(f, "{}", single),
            many => {
                write!(f, "[")?;
                for (i, error) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", error)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl FieldErrorList {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Append one error
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Append every error of `other`, preserving its order
    pub fn append(&mut self, other: FieldErrorList) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors of one kind, in order
    pub fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Whether any error sits at exactly `path`
    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path.to_string() == path)
    }

    /// Ok if no errors, Err carrying the whole list otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for FieldErrorList {
    fn from(error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.push(error);
        errors
    }
}

impl From<Vec<FieldError>> for FieldErrorList {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<FieldError> for FieldErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldError> for FieldErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl IntoIterator for FieldErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn path(s: &str) -> FieldPath {
        FieldPath::from_dotted(s)
    }

    #[test]
    fn test_message_shapes() {
        assert_eq!(
            FieldError::required(path("spec.cidr"), "").to_string(),
            "spec.cidr: Required value"
        );
        assert_eq!(
            FieldError::invalid(path("spec.cidr"), "10.0.0.0", "must include a prefix length").to_string(),
            "spec.cidr: Invalid value: \"10.0.0.0\": must include a prefix length"
        );
        assert_eq!(
            FieldError::too_long(path("metadata.name"), "x", 253).message,
            "Too long: may not be more than 253 bytes"
        );
        assert_eq!(
            FieldError::forbidden(path("spec.traffic"), "field is immutable").message,
            "Forbidden: field is immutable"
        );
        assert_eq!(
            FieldError::duplicate(path("spec.ingressPorts[1]"), "TCP/80").message,
            "Duplicate value: TCP/80"
        );
    }

    #[test]
    fn test_not_supported_carries_allowed_set() {
        let error = FieldError::not_supported(path("spec.defaultAction"), "INVALID", &["ACCEPT", "DROP"]);
        assert_eq!(error.kind, ErrorKind::NotSupported);
        assert_eq!(error.supported_values, vec!["ACCEPT", "DROP"]);
        assert_eq!(
            error.message,
            "Unsupported value: \"INVALID\": supported values: \"ACCEPT\", \"DROP\""
        );
    }

    #[test]
    fn test_numeric_invalid_value() {
        let error = FieldError::invalid(path("spec.ports[0].port"), 70000, "must be between 1 and 65535, inclusive");
        assert_eq!(error.invalid_value, Some(Value::from(70000)));
        assert!(error.message.starts_with("Invalid value: 70000: "));
    }

    /// Counts events emitted while it is the default subscriber
    struct EventCounter(Arc<AtomicUsize>);

    impl tracing::Subscriber for EventCounter {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, _: &tracing::Event<'_>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    fn count_events(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(EventCounter(count.clone()), f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_violation_traced_once_however_deeply_nested() {
        let events = count_events(|| {
            let inner = FieldErrorList::from(FieldError::required(path("spec.a"), ""));
            let mut middle = FieldErrorList::new();
            middle.append(inner);
            let mut outer: FieldErrorList = vec![FieldError::forbidden(path("b"), "no")].into_iter().collect();
            outer.append(middle);
            assert_eq!(outer.len(), 2);
        });
        assert_eq!(events, 2);
    }

    #[test]
    fn test_list_keeps_order_and_duplicates() {
        let mut errors = FieldErrorList::new();
        errors.push(FieldError::required(path("a"), ""));
        errors.push(FieldError::required(path("a"), ""));
        errors.append(FieldErrorList::from(FieldError::forbidden(path("b"), "no")));

        assert_eq!(errors.len(), 3);
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_list_rendering() {
        let empty = FieldErrorList::new();
        assert_eq!(empty.to_string(), "");

        let single = FieldErrorList::from(FieldError::required(path("spec.cidr"), ""));
        assert_eq!(single.to_string(), "spec.cidr: Required value");

        let many: FieldErrorList = vec![
            FieldError::required(path("a"), ""),
            FieldError::forbidden(path("b"), "no"),
        ]
        .into();
        assert_eq!(many.to_string(), "[a: Required value, b: Forbidden: no]");
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrorList::new().into_result().is_ok());

        let errors = FieldErrorList::from(FieldError::required(path("a"), ""));
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let error = FieldError::not_supported(path("spec.action"), "ALLOW", &["ACCEPT", "DROP"]);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["path"], "spec.action");
        assert_eq!(value["kind"], "NotSupported");
        assert_eq!(value["invalidValue"], "ALLOW");
        assert_eq!(value["supportedValues"], serde_json::json!(["ACCEPT", "DROP"]));

        let required = serde_json::to_value(FieldError::required(path("a"), "")).unwrap();
        assert!(required.get("invalidValue").is_none());
    }
}
