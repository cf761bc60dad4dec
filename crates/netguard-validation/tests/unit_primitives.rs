//! Unit tests for the primitive validators and error rendering
//!
//! These exercise the public validation functions directly, the way a
//! caller building its own resource checks would.

use netguard_types::{NamespacedObjectReference, ObjectReference, PortRange, ResourceKind, GROUP_VERSION};
use netguard_validation::validation::enums::{validate_enum, validate_required_enum};
use netguard_validation::validation::naming::{validate_generate_name_prefix, validate_length, validate_name};
use netguard_validation::validation::network::{
    validate_exactly_one_port_form, validate_network_prefix, validate_port, validate_port_range,
    validate_port_text,
};
use netguard_validation::validation::reference::{
    validate_namespaced_object_reference, validate_object_reference,
};
use netguard_validation::{ErrorKind, FieldError, FieldErrorList, FieldPath, ValidationContext};

#[cfg(test)]
mod error_rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_shapes() {
        let path = FieldPath::new("spec").child("field");
        let cases = vec![
            (FieldError::required(path.clone(), ""), "spec.field: Required value"),
            (
                FieldError::required(path.clone(), "must be set"),
                "spec.field: Required value: must be set",
            ),
            (
                FieldError::invalid(path.clone(), "x", "bad"),
                r#"spec.field: Invalid value: "x": bad"#,
            ),
            (
                FieldError::invalid(path.clone(), 70000, "out of range"),
                "spec.field: Invalid value: 70000: out of range",
            ),
            (
                FieldError::not_supported(path.clone(), "x", &["A", "B"]),
                r#"spec.field: Unsupported value: "x": supported values: "A", "B""#,
            ),
            (
                FieldError::too_long(path.clone(), "xxxx", 3),
                "spec.field: Too long: may not be more than 3 bytes",
            ),
            (
                FieldError::duplicate(path.clone(), "seen before"),
                "spec.field: Duplicate value: seen before",
            ),
            (
                FieldError::forbidden(path.clone(), "field is immutable"),
                "spec.field: Forbidden: field is immutable",
            ),
            (
                FieldError::required(FieldPath::root(), ""),
                "<root>: Required value",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_list_rendering() {
        let mut errors = FieldErrorList::new();
        assert_eq!(errors.to_string(), "");

        errors.push(FieldError::required(FieldPath::new("a"), ""));
        assert_eq!(errors.to_string(), "a: Required value");

        errors.push(FieldError::required(FieldPath::new("b"), ""));
        assert_eq!(errors.to_string(), "[a: Required value, b: Required value]");
    }

    #[test]
    fn test_list_serializes_as_array() {
        let errors = FieldErrorList::from(FieldError::not_supported(
            FieldPath::new("spec").child("traffic"),
            "ingress",
            &["INGRESS", "EGRESS"],
        ));
        let value = serde_json::to_value(&errors).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "path": "spec.traffic",
                "kind": "NotSupported",
                "invalidValue": "ingress",
                "message": "Unsupported value: \"ingress\": supported values: \"INGRESS\", \"EGRESS\"",
                "supportedValues": ["INGRESS", "EGRESS"]
            }])
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrorList::new().into_result().is_ok());
        let errors = FieldErrorList::from(FieldError::forbidden(FieldPath::new("x"), ""));
        assert_eq!(errors.clone().into_result(), Err(errors));
    }
}

#[cfg(test)]
mod naming_validation {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path() -> FieldPath {
        FieldPath::new("metadata").child("name")
    }

    #[test]
    fn test_name_length_limit() {
        assert!(validate_name(&"a".repeat(253), &path()).is_empty());
        let errors = validate_name(&"a".repeat(254), &path());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);
    }

    #[test]
    fn test_uppercase_name_is_invalid() {
        assert_eq!(validate_name("Web", &path()).len(), 1);
    }

    #[test]
    fn test_generate_name_prefix() {
        let path = FieldPath::new("metadata").child("generateName");
        assert!(validate_generate_name_prefix("web-", &path).is_empty());
        assert!(validate_generate_name_prefix("web.", &path).is_empty());
        assert!(validate_generate_name_prefix("web", &path).is_empty());
        assert_eq!(validate_generate_name_prefix("", &path).len(), 1);
        assert_eq!(validate_generate_name_prefix("-web", &path).len(), 1);
        assert_eq!(validate_generate_name_prefix(".web", &path).len(), 1);
    }

    #[test]
    fn test_length_ceiling() {
        let path = FieldPath::new("spec").child("description");
        assert!(validate_length("abc", &path, 3).is_empty());
        let errors = validate_length("abcd", &path, 3);
        assert_eq!(errors.errors()[0].kind, ErrorKind::TooLong);
    }
}

#[cfg(test)]
mod enum_validation {
    use super::*;
    use pretty_assertions::assert_eq;

    const DIRECTIONS: &[&str] = &["INGRESS", "EGRESS"];

    #[test]
    fn test_case_differs_is_rejected() {
        let errors = validate_enum("ingress", DIRECTIONS, &FieldPath::new("traffic"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::NotSupported);
        assert_eq!(errors.errors()[0].supported_values, vec!["INGRESS", "EGRESS"]);
    }

    #[test]
    fn test_empty_value_composes_with_required() {
        assert!(validate_enum("", DIRECTIONS, &FieldPath::new("traffic")).is_empty());
        let errors = validate_required_enum("", DIRECTIONS, &FieldPath::new("traffic"));
        assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
    }
}

#[cfg(test)]
mod reference_validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrong_kind_scenario() {
        let reference = ObjectReference::new(GROUP_VERSION, "Service", "web");
        let errors = validate_object_reference(
            &ValidationContext::default(),
            &reference,
            ResourceKind::AddressGroup,
            &FieldPath::new("spec").child("addressGroupRef"),
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);
        assert!(errors.errors()[0].message.contains("AddressGroup"));
    }

    #[test]
    fn test_error_count_tracks_missing_fields() {
        let ctx = ValidationContext::default();
        let path = FieldPath::new("ref");
        let full = NamespacedObjectReference::new(GROUP_VERSION, "Service", "web", "prod");

        let mut no_name = full.clone();
        no_name.object_ref.name.clear();
        let mut no_namespace = full.clone();
        no_namespace.namespace.clear();
        let mut no_kind = full.clone();
        no_kind.object_ref.kind.clear();

        for reference in [no_name, no_namespace, no_kind] {
            let errors = validate_namespaced_object_reference(&ctx, &reference, ResourceKind::Service, &path);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
        }
    }
}

#[cfg(test)]
mod port_validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_port_bounds() {
        let path = FieldPath::new("port");
        assert!(validate_port(1, &path).is_empty());
        assert!(validate_port(65535, &path).is_empty());
        assert_eq!(validate_port(0, &path).len(), 1);
        assert_eq!(validate_port(65536, &path).len(), 1);
    }

    #[test]
    fn test_reversed_range_adds_one_error() {
        let path = FieldPath::new("portRange");
        assert_eq!(validate_port_range(&PortRange::new(100, 10), &path).len(), 1);
        // per-bound errors plus the ordering error
        assert_eq!(validate_port_range(&PortRange::new(70000, 0), &path).len(), 3);
    }

    #[test]
    fn test_port_zero_is_unset() {
        let path = FieldPath::new("ports").index(0);
        let errors = validate_exactly_one_port_form(0, None, &path);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
        assert!(validate_exactly_one_port_form(0, Some(&PortRange::single(80)), &path).is_empty());
    }

    #[test]
    fn test_port_text() {
        let path = FieldPath::new("port");
        for ok in ["1", "80", "65535", "1-65535", "80-80"] {
            assert!(validate_port_text(ok, &path).is_empty(), "{} should be accepted", ok);
        }
        for bad in ["0", "65536", "+80", " 80", "80-", "8o", "90-80", "1-2-3"] {
            assert_eq!(validate_port_text(bad, &path).len(), 1, "{} should be rejected", bad);
        }
    }
}

#[cfg(test)]
mod network_validation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cidr_scenario() {
        let path = FieldPath::new("spec").child("CIDR");
        assert!(validate_network_prefix("192.168.1.0/24", &path).is_empty());

        let errors = validate_network_prefix("192.168.1.0", &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Invalid);

        let errors = validate_network_prefix("", &path);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ErrorKind::Required);
    }

    #[test]
    fn test_ipv6_prefixes() {
        let path = FieldPath::new("cidr");
        assert!(validate_network_prefix("2001:db8::/32", &path).is_empty());
        assert_eq!(validate_network_prefix("2001:db8::/129", &path).len(), 1);
    }
}
