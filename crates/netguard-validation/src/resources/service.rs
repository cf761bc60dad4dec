//! Service and ServiceAlias validators
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::validation::duplicates::FirstSeen;
use crate::validation::enums::validate_required_enum;
use crate::validation::network::{validate_port_text, PortKey};
use crate::validation::reference::validate_object_reference;
use crate::validation::{FieldError, FieldErrorList, FieldPath, ImmutableField, ResourceValidator, ValidationContext};
use netguard_types::{ResourceKind, Service, ServiceAlias, TRANSPORT_PROTOCOLS};

/// Validates `Service` objects
///
/// Every ingress port needs a supported protocol and a port text; a
/// `(protocol, port)` pair may be declared only once. `80`, `080` and
/// `80-80` name the same port.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceValidator;

impl ResourceValidator for ServiceValidator {
    type Object = Service;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<Service>] = &[];

    fn validate_spec(&self, _ctx: &ValidationContext, obj: &Service, path: &FieldPath) -> FieldErrorList {
        let mut errors = FieldErrorList::new();
        let ports_path = path.child("ingressPorts");
        let mut seen = FirstSeen::new();

        for (index, port) in obj.spec.ingress_ports.iter().enumerate() {
            let port_path = ports_path.index(index);
            errors.append(validate_required_enum(
                &port.protocol,
                TRANSPORT_PROTOCOLS,
                &port_path.child("protocol"),
            ));
            errors.append(validate_port_text(&port.port, &port_path.child("port")));

            if port.protocol.is_empty() || port.port.is_empty() {
                continue;
            }
            if let Some(first) = seen.observe((port.protocol.as_str(), PortKey::of(&port.port)), index) {
                errors.push(FieldError::duplicate(
                    port_path,
                    format!(
                        "{} port {} is already declared at {}",
                        port.protocol,
                        port.port,
                        ports_path.index(first)
                    ),
                ));
            }
        }

        errors
    }
}

/// Validates `ServiceAlias` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceAliasValidator;

impl ResourceValidator for ServiceAliasValidator {
    type Object = ServiceAlias;

    const IMMUTABLE_FIELDS: &'static [ImmutableField<ServiceAlias>] =
        &[crate::immutable_field!("spec.serviceRef" => spec.service_ref)];

    fn validate_spec(&self, ctx: &ValidationContext, obj: &ServiceAlias, path: &FieldPath) -> FieldErrorList {
        validate_object_reference(
            ctx,
            &obj.spec.service_ref,
            ResourceKind::Service,
            &path.child("serviceRef"),
        )
    }
}
