//! The resource kinds of `netguard.sgroups.io/v1beta1`
//!
//! Each resource is a `metadata` block plus a kind-specific `spec`. Closed
//! value sets are kept as plain strings in the objects, so that an
//! out-of-set value survives deserialization and can be reported by the
//! validation layer; the allowed sets are exported as constants below.
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::kind::{Resource, ResourceKind};
use crate::meta::ObjectMeta;
use crate::ports::{IngressPort, PortSpec, ProtocolPorts};
use crate::reference::{NamespacedObjectReference, ObjectReference};
use serde::{Deserialize, Serialize};

/// Transport protocols of ports and rules
pub const TRANSPORT_PROTOCOLS: &[&str] = &["TCP", "UDP"];

/// Actions an address group or rule can take on matching traffic
pub const RULE_ACTIONS: &[&str] = &["ACCEPT", "DROP"];

/// Traffic directions of address-group rules
pub const TRAFFIC_DIRECTIONS: &[&str] = &["INGRESS", "EGRESS"];

/// Traffic directions of service-to-service rules
pub const S2S_TRAFFIC_DIRECTIONS: &[&str] = &["ingress", "egress"];

macro_rules! impl_resource {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl Resource for $kind {
                const KIND: ResourceKind = ResourceKind::$kind;

                fn metadata(&self) -> &ObjectMeta {
                    &self.metadata
                }
            }
        )+
    };
}

/// A service and the ports it exposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub ingress_ports: Vec<IngressPort>,
}

/// An alias naming a service, used as the endpoint of service rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAlias {
    pub metadata: ObjectMeta,
    pub spec: ServiceAliasSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceAliasSpec {
    pub service_ref: ObjectReference,
}

/// A group of addresses sharing a default traffic action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressGroup {
    pub metadata: ObjectMeta,
    pub spec: AddressGroupSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressGroupSpec {
    pub default_action: String,
    pub logs: bool,
    pub trace: bool,
}

/// Binds a service to an address group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressGroupBinding {
    pub metadata: ObjectMeta,
    pub spec: AddressGroupBindingSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressGroupBindingSpec {
    pub service_ref: ObjectReference,
    pub address_group_ref: NamespacedObjectReference,
}

/// The service ports reachable through an address group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressGroupPortMapping {
    pub metadata: ObjectMeta,
    pub spec: AddressGroupPortMappingSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressGroupPortMappingSpec {
    pub access_ports: Vec<ServicePortsRef>,
}

/// A service reference together with the ports it contributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePortsRef {
    #[serde(flatten)]
    pub service_ref: NamespacedObjectReference,
    pub ports: ProtocolPorts,
}

/// Allows services of one namespace to bind to an address group of another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressGroupBindingPolicy {
    pub metadata: ObjectMeta,
    pub spec: AddressGroupBindingPolicySpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressGroupBindingPolicySpec {
    pub address_group_ref: NamespacedObjectReference,
    pub service_ref: NamespacedObjectReference,
}

/// Service-to-service traffic rule between two service aliases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleS2S {
    pub metadata: ObjectMeta,
    pub spec: RuleS2SSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleS2SSpec {
    pub traffic: String,
    pub service_local_ref: NamespacedObjectReference,
    pub service_ref: NamespacedObjectReference,
    pub trace: bool,
}

/// Ingress/egress traffic rule between two address groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IEAgAgRule {
    pub metadata: ObjectMeta,
    pub spec: IEAgAgRuleSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IEAgAgRuleSpec {
    pub transport: String,
    pub traffic: String,
    pub address_group_local: NamespacedObjectReference,
    pub address_group: NamespacedObjectReference,
    pub ports: Vec<PortSpec>,
    pub action: String,
    pub logs: bool,
    pub trace: bool,
    pub priority: i32,
}

/// A network prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub metadata: ObjectMeta,
    pub spec: NetworkSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    /// Network prefix in CIDR notation
    #[serde(rename = "CIDR")]
    pub cidr: String,
}

/// Attaches a network to an address group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkBinding {
    pub metadata: ObjectMeta,
    pub spec: NetworkBindingSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkBindingSpec {
    pub network_ref: ObjectReference,
    pub address_group_ref: ObjectReference,
}

impl_resource!(
    Service,
    ServiceAlias,
    AddressGroup,
    AddressGroupBinding,
    AddressGroupPortMapping,
    AddressGroupBindingPolicy,
    RuleS2S,
    IEAgAgRule,
    Network,
    NetworkBinding,
);
