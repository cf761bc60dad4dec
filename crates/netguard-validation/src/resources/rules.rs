//! Traffic rule validators
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::enums::validate_required_enum;
use crate::validation::network::validate_port_spec;
use crate::validation::reference::validate_namespaced_object_reference;
use crate::validation::{FieldErrorList, FieldPath, ImmutableField, ResourceValidator, ValidationContext};
use netguard_types::{
    IEAgAgRule, ResourceKind, RuleS2S, RULE_ACTIONS, S2S_TRAFFIC_DIRECTIONS, TRAFFIC_DIRECTIONS,
    TRANSPORT_PROTOCOLS,
};

/// Validates `RuleS2S` objects
///
/// Both endpoints are service aliases. The direction uses lowercase values,
/// unlike address-group rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleS2SValidator;

impl ResourceValidator for RuleS2SValidator {
    type Object = RuleS2S;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<RuleS2S>] = &[
        crate::immutable_field!("spec.traffic" => spec.traffic),
        crate::immutable_field!("spec.serviceLocalRef" => spec.service_local_ref),
        crate::immutable_field!("spec.serviceRef" => spec.service_ref),
    ];

    fn validate_spec(&self, ctx: &ValidationContext, obj: &RuleS2S, path: &FieldPath) -> FieldErrorList {
        let mut errors =
            validate_required_enum(&obj.spec.traffic, S2S_TRAFFIC_DIRECTIONS, &path.child("traffic"));
        errors.append(validate_namespaced_object_reference(
            ctx,
            &obj.spec.service_local_ref,
            ResourceKind::ServiceAlias,
            &path.child("serviceLocalRef"),
        ));
        errors.append(validate_namespaced_object_reference(
            ctx,
            &obj.spec.service_ref,
            ResourceKind::ServiceAlias,
            &path.child("serviceRef"),
        ));
        errors
    }
}

/// Validates `IEAgAgRule` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct IEAgAgRuleValidator;

impl ResourceValidator for IEAgAgRuleValidator {
    type Object = IEAgAgRule;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<IEAgAgRule>] = &[
        crate::immutable_field!("spec.transport" => spec.transport),
        crate::immutable_field!("spec.traffic" => spec.traffic),
        crate::immutable_field!("spec.addressGroupLocal" => spec.address_group_local),
        crate::immutable_field!("spec.addressGroup" => spec.address_group),
    ];

    fn validate_spec(&self, ctx: &ValidationContext, obj: &IEAgAgRule, path: &FieldPath) -> FieldErrorList {
        let spec = &obj.spec;
        let mut errors = validate_required_enum(&spec.transport, TRANSPORT_PROTOCOLS, &path.child("transport"));
        errors.append(validate_required_enum(&spec.traffic, TRAFFIC_DIRECTIONS, &path.child("traffic")));
        errors.append(validate_namespaced_object_reference(
            ctx,
            &spec.address_group_local,
            ResourceKind::AddressGroup,
            &path.child("addressGroupLocal"),
        ));
        errors.append(validate_namespaced_object_reference(
            ctx,
            &spec.address_group,
            ResourceKind::AddressGroup,
            &path.child("addressGroup"),
        ));

        let ports_path = path.child("ports");
        for (index, port) in spec.ports.iter().enumerate() {
            errors.append(validate_port_spec(port, &ports_path.index(index)));
        }

        errors.append(validate_required_enum(&spec.action, RULE_ACTIONS, &path.child("action")));
        errors
    }
}
