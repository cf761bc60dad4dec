//! Naming and length rules
//!
//! The grammars here are part of the external contract: client-side tooling
//! pre-validates names with the same rules, so they must stay bit-exact.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{FieldError, FieldErrorList};
use crate::validation::path::FieldPath;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a DNS-1123 subdomain
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

/// Maximum length of the name part of a qualified name
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

/// Maximum length of a label value
pub const LABEL_VALUE_MAX_LENGTH: usize = 63;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";

static DNS1123_SUBDOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{0}(\\.{0})*$", DNS1123_LABEL_FMT)).expect("subdomain regex is valid")
});

static QUALIFIED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}$", QUALIFIED_NAME_FMT)).expect("qualified name regex is valid")
});

static LABEL_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^({})?$", QUALIFIED_NAME_FMT)).expect("label value regex is valid")
});

const DNS1123_SUBDOMAIN_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case \
     alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character \
     (e.g. 'example.com')";

const QUALIFIED_NAME_MSG: &str = "must consist of alphanumeric characters, '-', '_' or '.', and \
     must start and end with an alphanumeric character (e.g. 'MyName', 'my.name', '123-abc')";

const LABEL_VALUE_MSG: &str = "a valid label must be an empty string or consist of alphanumeric \
     characters, '-', '_' or '.', and must start and end with an alphanumeric character \
     (e.g. 'MyValue', 'my_value', '12345')";

fn max_len_msg(max: usize) -> String {
    format!("must be no more than {} characters", max)
}

fn subdomain_grammar_errors(value: &str) -> Vec<String> {
    if DNS1123_SUBDOMAIN_RE.is_match(value) {
        Vec::new()
    } else {
        vec![DNS1123_SUBDOMAIN_MSG.to_string()]
    }
}

/// Problems that keep `value` from being a DNS-1123 subdomain; empty when valid
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errors.push(max_len_msg(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    errors.extend(subdomain_grammar_errors(value));
    errors
}

/// Problems that keep `value` from being a qualified name (`[prefix/]name`)
pub fn is_qualified_name(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let parts: Vec<&str> = value.split('/').collect();

    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                errors.push("prefix part must be non-empty".to_string());
            } else {
                errors.extend(
                    is_dns1123_subdomain(prefix)
                        .into_iter()
                        .map(|msg| format!("prefix part {}", msg)),
                );
            }
            *name
        }
        _ => {
            errors.push(format!(
                "a qualified name {} with an optional DNS subdomain prefix and '/' (e.g. 'example.com/MyName')",
                QUALIFIED_NAME_MSG
            ));
            return errors;
        }
    };

    if name.is_empty() {
        errors.push("name part must be non-empty".to_string());
    } else if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        errors.push(format!("name part {}", max_len_msg(QUALIFIED_NAME_MAX_LENGTH)));
    }
    if !name.is_empty() && !QUALIFIED_NAME_RE.is_match(name) {
        errors.push(format!("name part {}", QUALIFIED_NAME_MSG));
    }

    errors
}

/// Problems that keep `value` from being a label value
pub fn is_valid_label_value(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        errors.push(max_len_msg(LABEL_VALUE_MAX_LENGTH));
    }
    if !LABEL_VALUE_RE.is_match(value) {
        errors.push(LABEL_VALUE_MSG.to_string());
    }
    errors
}

fn invalid_if_any(value: &str, path: &FieldPath, messages: Vec<String>) -> FieldErrorList {
    if messages.is_empty() {
        FieldErrorList::new()
    } else {
        FieldErrorList::from(FieldError::invalid(path.clone(), value, messages.join("; ")))
    }
}

/// Validate a resource or namespace name against the subdomain grammar
///
/// Yields at most one `Invalid` error, whose message lists every problem.
pub fn validate_name(value: &str, path: &FieldPath) -> FieldErrorList {
    invalid_if_any(value, path, is_dns1123_subdomain(value))
}

/// Validate a `generateName` prefix
///
/// A generated suffix is appended to the prefix, so the prefix may end in
/// `-` or `.`; it must still start with an alphanumeric character.
pub fn validate_generate_name_prefix(value: &str, path: &FieldPath) -> FieldErrorList {
    if value.is_empty() {
        return FieldErrorList::from(FieldError::invalid(path.clone(), value, "prefix must be non-empty"));
    }

    let mut messages = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        messages.push(max_len_msg(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    // Stand in for the generated suffix so the trailing character is judged as interior.
    messages.extend(subdomain_grammar_errors(&format!("{}a", value)));
    invalid_if_any(value, path, messages)
}

/// Fail `TooLong` when `value` is longer than `max` bytes
pub fn validate_length(value: &str, path: &FieldPath, max: usize) -> FieldErrorList {
    if value.len() > max {
        FieldErrorList::from(FieldError::too_long(path.clone(), value, max))
    } else {
        FieldErrorList::new()
    }
}

/// Validate a label or annotation key
pub fn validate_qualified_name(value: &str, path: &FieldPath) -> FieldErrorList {
    invalid_if_any(value, path, is_qualified_name(value))
}

/// Validate a label value
pub fn validate_label_value(value: &str, path: &FieldPath) -> FieldErrorList {
    invalid_if_any(value, path, is_valid_label_value(value))
}
