//! Netguard Types - Resource object model for the netguard admission API
//!
//! This crate defines the typed resource objects that the admission engine
//! inspects before they are persisted:
//! - **Metadata**: the shared `ObjectMeta` block carried by every resource
//! - **References**: typed pointers between resources, with and without namespace
//! - **Ports**: single ports, port ranges and protocol-scoped port lists
//! - **Resources**: the ten resource kinds of `netguard.sgroups.io/v1beta1`
//!
//! Every string field defaults to empty when absent on the wire, so a
//! malformed manifest still deserializes and the validation layer can report
//! exactly what is missing instead of failing on the first parse error.
//!
//! ## Example
//!
//! ```rust
//! use netguard_types::{AddressGroup, AddressGroupSpec, ObjectMeta, Resource, ResourceKind};
//!
//! let group = AddressGroup {
//!     metadata: ObjectMeta::named("default", "test-ag"),
//!     spec: AddressGroupSpec {
//!         default_action: "ACCEPT".to_string(),
//!         ..Default::default()
//!     },
//! };
//!
//! assert_eq!(AddressGroup::KIND, ResourceKind::AddressGroup);
//! assert_eq!(group.metadata().name, "test-ag");
//! ```
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

pub mod kind;
pub mod meta;
pub mod ports;
pub mod reference;
pub mod resources;

/// The single schema identifier served by this API group
pub const GROUP_VERSION: &str = "netguard.sgroups.io/v1beta1";

// Re-export commonly used types for convenience
pub use kind::{AnyResource, ParseKindError, Resource, ResourceKind};
pub use meta::ObjectMeta;
pub use ports::{IngressPort, PortConfig, PortRange, PortSpec, ProtocolPorts};
pub use reference::{NamespacedObjectReference, ObjectReference};
pub use resources::{
    AddressGroup, AddressGroupBinding, AddressGroupBindingPolicy,
    AddressGroupBindingPolicySpec, AddressGroupBindingSpec, AddressGroupPortMapping,
    AddressGroupPortMappingSpec, AddressGroupSpec, IEAgAgRule, IEAgAgRuleSpec, Network,
    NetworkBinding, NetworkBindingSpec, NetworkSpec, RuleS2S, RuleS2SSpec, Service,
    ServiceAlias, ServiceAliasSpec, ServicePortsRef, ServiceSpec,
    RULE_ACTIONS, S2S_TRAFFIC_DIRECTIONS, TRAFFIC_DIRECTIONS, TRANSPORT_PROTOCOLS,
};
