//! Address group validators: the group itself, bindings, port mappings and
//! cross-namespace binding policies
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::duplicates::FirstSeen;
use crate::validation::enums::validate_required_enum;
use crate::validation::network::{validate_port_text, PortKey};
use crate::validation::reference::{validate_namespaced_object_reference, validate_object_reference};
use crate::validation::{FieldError, FieldErrorList, FieldPath, ImmutableField, ResourceValidator, ValidationContext};
use netguard_types::{
    AddressGroup, AddressGroupBinding, AddressGroupBindingPolicy, AddressGroupPortMapping, ResourceKind,
    RULE_ACTIONS,
};

/// Validates `AddressGroup` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressGroupValidator;

impl ResourceValidator for AddressGroupValidator {
    type Object = AddressGroup;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<AddressGroup>] = &[];

    fn validate_spec(&self, _ctx: &ValidationContext, obj: &AddressGroup, path: &FieldPath) -> FieldErrorList {
        validate_required_enum(&obj.spec.default_action, RULE_ACTIONS, &path.child("defaultAction"))
    }
}

/// Validates `AddressGroupBinding` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressGroupBindingValidator;

impl ResourceValidator for AddressGroupBindingValidator {
    type Object = AddressGroupBinding;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<AddressGroupBinding>] = &[
        crate::immutable_field!("spec.serviceRef" => spec.service_ref),
        crate::immutable_field!("spec.addressGroupRef" => spec.address_group_ref),
    ];

    fn validate_spec(
        &self,
        ctx: &ValidationContext,
        obj: &AddressGroupBinding,
        path: &FieldPath,
    ) -> FieldErrorList {
        let mut errors = validate_object_reference(
            ctx,
            &obj.spec.service_ref,
            ResourceKind::Service,
            &path.child("serviceRef"),
        );
        errors.append(validate_namespaced_object_reference(
            ctx,
            &obj.spec.address_group_ref,
            ResourceKind::AddressGroup,
            &path.child("addressGroupRef"),
        ));
        errors
    }
}

/// Validates `AddressGroupPortMapping` objects
///
/// A service may appear only once in `accessPorts`, and a port text only
/// once within each protocol list of an entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressGroupPortMappingValidator;

impl ResourceValidator for AddressGroupPortMappingValidator {
    type Object = AddressGroupPortMapping;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<AddressGroupPortMapping>] = &[];

    fn validate_spec(
        &self,
        ctx: &ValidationContext,
        obj: &AddressGroupPortMapping,
        path: &FieldPath,
    ) -> FieldErrorList {
        let mut errors = FieldErrorList::new();
        let access_path = path.child("accessPorts");
        let mut services = FirstSeen::new();

        for (index, access) in obj.spec.access_ports.iter().enumerate() {
            let entry_path = access_path.index(index);
            errors.append(validate_namespaced_object_reference(
                ctx,
                &access.service_ref,
                ResourceKind::Service,
                &entry_path,
            ));

            if let Some(first) = services.observe(&access.service_ref, index) {
                errors.push(FieldError::duplicate(
                    entry_path.clone(),
                    format!(
                        "service {}/{} is already mapped at {}",
                        access.service_ref.namespace,
                        access.service_ref.object_ref.name,
                        access_path.index(first)
                    ),
                ));
            }

            for (protocol, ports) in access.ports.by_protocol() {
                let protocol_path = entry_path.child("ports").child(protocol);
                let mut seen = FirstSeen::new();
                for (port_index, port) in ports.iter().enumerate() {
                    let port_path = protocol_path.index(port_index);
                    errors.append(validate_port_text(&port.port, &port_path.child("port")));

                    if port.port.is_empty() {
                        continue;
                    }
                    if let Some(first) = seen.observe(PortKey::of(&port.port), port_index) {
                        errors.push(FieldError::duplicate(
                            port_path,
                            format!(
                                "{} port {} is already declared at {}",
                                protocol,
                                port.port,
                                protocol_path.index(first)
                            ),
                        ));
                    }
                }
            }
        }

        errors
    }
}

/// Validates `AddressGroupBindingPolicy` objects
///
/// A policy lives in the namespace of the address group it opens up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressGroupBindingPolicyValidator;

impl ResourceValidator for AddressGroupBindingPolicyValidator {
    type Object = AddressGroupBindingPolicy;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<AddressGroupBindingPolicy>] = &[
        crate::immutable_field!("spec.addressGroupRef" => spec.address_group_ref),
        crate::immutable_field!("spec.serviceRef" => spec.service_ref),
    ];

    fn validate_spec(
        &self,
        ctx: &ValidationContext,
        obj: &AddressGroupBindingPolicy,
        path: &FieldPath,
    ) -> FieldErrorList {
        let address_group_path = path.child("addressGroupRef");
        let mut errors = validate_namespaced_object_reference(
            ctx,
            &obj.spec.address_group_ref,
            ResourceKind::AddressGroup,
            &address_group_path,
        );
        errors.append(validate_namespaced_object_reference(
            ctx,
            &obj.spec.service_ref,
            ResourceKind::Service,
            &path.child("serviceRef"),
        ));

        let policy_namespace = &obj.metadata.namespace;
        let group_namespace = &obj.spec.address_group_ref.namespace;
        if !policy_namespace.is_empty() && !group_namespace.is_empty() && policy_namespace != group_namespace {
            errors.push(FieldError::invalid(
                address_group_path.child("namespace"),
                group_namespace.as_str(),
                format!("must equal the policy namespace {}", policy_namespace),
            ));
        }

        errors
    }
}
