//! Network and NetworkBinding validators
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::network::validate_network_prefix;
use crate::validation::reference::validate_object_reference;
use crate::validation::{FieldErrorList, FieldPath, ImmutableField, ResourceValidator, ValidationContext};
use netguard_types::{Network, NetworkBinding, ResourceKind};

/// Validates `Network` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkValidator;

impl ResourceValidator for NetworkValidator {
    type Object = Network;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<Network>] =
        &[crate::immutable_field!("spec.CIDR" => spec.cidr)];

    fn validate_spec(&self, _ctx: &ValidationContext, obj: &Network, path: &FieldPath) -> FieldErrorList {
        validate_network_prefix(&obj.spec.cidr, &path.child("CIDR"))
    }
}

/// Validates `NetworkBinding` objects
///
/// The address group may be rebound; the network may not.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkBindingValidator;

impl ResourceValidator for NetworkBindingValidator {
    type Object = NetworkBinding;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<NetworkBinding>] =
        &[crate::immutable_field!("spec.networkRef" => spec.network_ref)];

    fn validate_spec(&self, ctx: &ValidationContext, obj: &NetworkBinding, path: &FieldPath) -> FieldErrorList {
        let mut errors = validate_object_reference(
            ctx,
            &obj.spec.network_ref,
            ResourceKind::Network,
            &path.child("networkRef"),
        );
        errors.append(validate_object_reference(
            ctx,
            &obj.spec.address_group_ref,
            ResourceKind::AddressGroup,
            &path.child("addressGroupRef"),
        ));
        errors
    }
}
