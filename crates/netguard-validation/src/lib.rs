//! Netguard Validation - Admission checks for netguard.sgroups.io resources
//!
//! This crate decides whether a proposed create, update or delete of a
//! netguard resource is well-formed before it is persisted. Validation never
//! stops at the first problem: every violation is collected into a
//! [`FieldErrorList`] addressed by [`FieldPath`].
//!
//! ## Features
//!
//! - **Field errors**: `Required`, `Invalid`, `NotSupported`, `TooLong`,
//!   `Duplicate` and `Forbidden` violations with stable rendering
//! - **Primitive validators**: resource names, label grammar, closed enums,
//!   ports, port ranges and network prefixes
//! - **References**: schema, kind, name and namespace checks through one path
//! - **Per-kind validators**: one [`ResourceValidator`] per resource kind,
//!   with declared immutable fields
//! - **Admission dispatch**: route requests over [`AnyResource`] and decide
//!
//! ## Quick Start
//!
//! ```rust
//! use netguard_types::{AddressGroup, AddressGroupSpec, ObjectMeta};
//! use netguard_validation::{AddressGroupValidator, ResourceValidator, ValidationContext};
//!
//! let ctx = ValidationContext::default();
//! let group = AddressGroup {
//!     metadata: ObjectMeta::named("default", "test-ag"),
//!     spec: AddressGroupSpec {
//!         default_action: "INVALID".to_string(),
//!         ..Default::default()
//!     },
//! };
//!
//! let errors = AddressGroupValidator.validate_create(&ctx, Some(&group));
//! assert_eq!(
//!     errors.to_string(),
//!     r#"spec.defaultAction: Unsupported value: "INVALID": supported values: "ACCEPT", "DROP""#
//! );
//! ```
//!
//! [`AnyResource`]: netguard_types::AnyResource
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

pub mod admission;
pub mod resources;
pub mod validation;

// Re-export commonly used types for convenience
pub use admission::{admit, admit_batch, AdmissionRequest, AdmissionResponse, Operation};
pub use resources::{
    AddressGroupBindingPolicyValidator, AddressGroupBindingValidator, AddressGroupPortMappingValidator,
    AddressGroupValidator, IEAgAgRuleValidator, NetworkBindingValidator, NetworkValidator, RuleS2SValidator,
    ServiceAliasValidator, ServiceValidator,
};
pub use validation::{
    diff_immutable, ErrorKind, FieldError, FieldErrorList, FieldPath, ImmutableField, PathSegment,
    PortTextError, ResourceValidator, ValidationConfig, ValidationContext,
};
