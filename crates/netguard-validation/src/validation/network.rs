//! Port and network-prefix validators
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::path::FieldPath;
use ipnet::IpNet;
use netguard_types::{PortRange, PortSpec};
use serde_json::json;
use thiserror::Error;

pub const MIN_PORT: i32 = 1;
pub const MAX_PORT: i32 = 65535;

/// Why a textual port (`"N"` or `"N-M"`) could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortTextError {
    #[error("port must be non-empty")]
    Empty,

    #[error("'{0}' is not a decimal port number")]
    NotDecimal(String),

    #[error("port {0} must be between 1 and 65535, inclusive")]
    OutOfRange(String),

    #[error("range start {from} is greater than range end {to}")]
    Reversed { from: i32, to: i32 },
}

/// Parse `"N"` or `"N-M"` into an inclusive range
pub fn parse_port_text(text: &str) -> Result<PortRange, PortTextError> {
    if text.is_empty() {
        return Err(PortTextError::Empty);
    }

    let (from, to) = match text.split_once('-') {
        Some((from, to)) => (parse_port_bound(from)?, parse_port_bound(to)?),
        None => {
            let port = parse_port_bound(text)?;
            (port, port)
        }
    };

    if from > to {
        return Err(PortTextError::Reversed { from, to });
    }
    Ok(PortRange::new(from, to))
}

/// Identity of a port text for duplicate detection
///
/// Valid texts compare by the range they denote, so `80`, `080` and `80-80`
/// are equal; invalid texts compare verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKey<'a> {
    Range(PortRange),
    Text(&'a str),
}

impl<'a> PortKey<'a> {
    pub fn of(text: &'a str) -> Self {
        match parse_port_text(text) {
            Ok(range) => PortKey::Range(range),
            Err(_) => PortKey::Text(text),
        }
    }
}

fn parse_port_bound(text: &str) -> Result<i32, PortTextError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortTextError::NotDecimal(text.to_string()));
    }
    let value: u64 = text
        .parse()
        .map_err(|_| PortTextError::OutOfRange(text.to_string()))?;
    if value < MIN_PORT as u64 || value > MAX_PORT as u64 {
        return Err(PortTextError::OutOfRange(text.to_string()));
    }
    Ok(value as i32)
}

/// A single port number must lie in 1..=65535
pub fn validate_port(port: i32, path: &FieldPath) -> FieldErrorList {
    let mut errors = FieldErrorList::new();
    if !(MIN_PORT..=MAX_PORT).contains(&port) {
        errors.push(FieldError::invalid(
            path.clone(),
            port,
            "must be between 1 and 65535, inclusive",
        ));
    }
    errors
}

/// Both bounds must be valid ports and `from <= to`
pub fn validate_port_range(range: &PortRange, path: &FieldPath) -> FieldErrorList {
    let mut errors = validate_port(range.from, &path.child("from"));
    errors.append(validate_port(range.to, &path.child("to")));

    if range.from > range.to {
        errors.push(FieldError::invalid(
            path.clone(),
            json!({ "from": range.from, "to": range.to }),
            "from must be less than or equal to to",
        ));
    }
    errors
}

/// Exactly one of the single-port form (non-zero) or the range form must be set
pub fn validate_exactly_one_port_form(
    port: i32,
    range: Option<&PortRange>,
    path: &FieldPath,
) -> FieldErrorList {
    let mut errors = FieldErrorList::new();
    match (port != 0, range) {
        (false, None) => {
            errors.push(FieldError::required(
                path.clone(),
                "one of port or portRange must be set",
            ));
        }
        (true, Some(range)) => {
            errors.push(FieldError::invalid(
                path.clone(),
                json!({ "port": port, "portRange": { "from": range.from, "to": range.to } }),
                "port and portRange are mutually exclusive",
            ));
        }
        _ => {}
    }
    errors
}

/// Validate a rule port entry: its form, then whichever form is present
pub fn validate_port_spec(spec: &PortSpec, path: &FieldPath) -> FieldErrorList {
    let mut errors = validate_exactly_one_port_form(spec.port, spec.port_range.as_ref(), path);
    if spec.has_port() {
        errors.append(validate_port(spec.port, &path.child("port")));
    }
    if let Some(range) = &spec.port_range {
        errors.append(validate_port_range(range, &path.child("portRange")));
    }
    errors
}

/// Validate a textual port (`"N"` or `"N-M"`)
pub fn validate_port_text(text: &str, path: &FieldPath) -> FieldErrorList {
    let mut errors = FieldErrorList::new();
    match parse_port_text(text) {
        Ok(_) => {}
        Err(PortTextError::Empty) => errors.push(FieldError::required(path.clone(), "")),
        Err(err) => errors.push(FieldError::invalid(path.clone(), text, err.to_string())),
    }
    errors
}

/// Parse an IPv4 or IPv6 prefix in CIDR notation
pub fn parse_network_prefix(text: &str) -> Option<IpNet> {
    text.parse().ok()
}

/// The prefix must be present and parse as an IPv4 or IPv6 CIDR
pub fn validate_network_prefix(text: &str, path: &FieldPath) -> FieldErrorList {
    let mut errors = FieldErrorList::new();
    if text.is_empty() {
        errors.push(FieldError::required(path.clone(), ""));
    } else if parse_network_prefix(text).is_none() {
        errors.push(FieldError::invalid(
            path.clone(),
            text,
            "must be a valid network prefix in CIDR notation (e.g. 10.0.0.0/8 or fd00::/64)",
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_key_normalizes_valid_text() {
        assert_eq!(PortKey::of("80"), PortKey::of("080"));
        assert_eq!(PortKey::of("80"), PortKey::of("80-80"));
        assert_ne!(PortKey::of("80"), PortKey::of("80-81"));
        assert_eq!(PortKey::of("x"), PortKey::Text("x"));
    }
    use crate::validation::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_port_text() {
        assert_eq!(parse_port_text("80"), Ok(PortRange::single(80)));
        assert_eq!(parse_port_text("8000-8080"), Ok(PortRange::new(8000, 8080)));
        assert_eq!(parse_port_text("1-65535"), Ok(PortRange::new(1, 65535)));
        assert_eq!(parse_port_text(""), Err(PortTextError::Empty));
        assert_eq!(parse_port_text("http"), Err(PortTextError::NotDecimal("http".into())));
        assert_eq!(parse_port_text("80-"), Err(PortTextError::NotDecimal("".into())));
        assert_eq!(parse_port_text("-80"), Err(PortTextError::NotDecimal("".into())));
        assert_eq!(parse_port_text("1-2-3"), Err(PortTextError::NotDecimal("2-3".into())));
        assert_eq!(parse_port_text("0"), Err(PortTextError::OutOfRange("0".into())));
        assert_eq!(parse_port_text("65536"), Err(PortTextError::OutOfRange("65536".into())));
        assert_eq!(
            parse_port_text("99999999999999999999999"),
            Err(PortTextError::OutOfRange("99999999999999999999999".into()))
        );
        assert_eq!(
            parse_port_text("443-80"),
            Err(PortTextError::Reversed { from: 443, to: 80 })
        );
    }

    #[test]
    fn test_validate_port() {
        let path = FieldPath::new("port");
        assert!(validate_port(1, &path).is_empty());
        assert!(validate_port(65535, &path).is_empty());
        assert_eq!(validate_port(0, &path).len(), 1);
        assert_eq!(validate_port(-1, &path).len(), 1);
        assert_eq!(validate_port(65536, &path).len(), 1);
    }

    #[test]
    fn test_validate_port_range() {
        let path = FieldPath::new("portRange");
        assert!(validate_port_range(&PortRange::new(80, 80), &path).is_empty());

        let errors = validate_port_range(&PortRange::new(443, 80), &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].path.to_string(), "portRange");

        let errors = validate_port_range(&PortRange::new(0, 70000), &path);
        assert!(errors.has_path("portRange.from"));
        assert!(errors.has_path("portRange.to"));
    }

    #[test]
    fn test_port_zero_means_unset() {
        let path = FieldPath::new("spec").child("ports").index(0);

        let errors = validate_exactly_one_port_form(0, None, &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Required);

        let range = PortRange::new(80, 90);
        assert!(validate_exactly_one_port_form(0, Some(&range), &path).is_empty());
        assert!(validate_exactly_one_port_form(80, None, &path).is_empty());

        let errors = validate_exactly_one_port_form(80, Some(&range), &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);
    }

    #[test]
    fn test_validate_port_spec() {
        let path = FieldPath::new("ports").index(1);
        assert!(validate_port_spec(&PortSpec::single(443), &path).is_empty());
        assert!(validate_port_spec(&PortSpec::range(1000, 2000), &path).is_empty());

        let errors = validate_port_spec(&PortSpec::range(2000, 1000), &path);
        assert_eq!(errors.len(), 1);
        assert!(errors.has_path("ports[1].portRange"));

        let errors = validate_port_spec(&PortSpec::single(70000), &path);
        assert!(errors.has_path("ports[1].port"));
    }

    #[test]
    fn test_validate_port_text() {
        let path = FieldPath::new("port");
        assert!(validate_port_text("80", &path).is_empty());
        assert_eq!(validate_port_text("", &path).errors()[0].kind, ErrorKind::Required);

        let errors = validate_port_text("80-70", &path);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);
        assert!(errors.errors()[0].message.contains("greater than"));
    }

    #[test]
    fn test_validate_network_prefix() {
        let path = FieldPath::new("spec").child("CIDR");
        assert!(validate_network_prefix("192.168.1.0/24", &path).is_empty());
        assert!(validate_network_prefix("10.0.0.0/8", &path).is_empty());
        assert!(validate_network_prefix("fd00::/64", &path).is_empty());

        let errors = validate_network_prefix("192.168.1.0", &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);

        let errors = validate_network_prefix("", &path);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Required);

        assert_eq!(validate_network_prefix("10.0.0.0/33", &path).len(), 1);
        assert_eq!(validate_network_prefix("not-a-cidr", &path).len(), 1);
    }
}
