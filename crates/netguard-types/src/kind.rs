//! Resource kinds and the closed set of resources the engine understands
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use crate::meta::ObjectMeta;
use crate::resources::{
    AddressGroup, AddressGroupBinding, AddressGroupBindingPolicy, AddressGroupPortMapping,
    IEAgAgRule, Network, NetworkBinding, RuleS2S, Service, ServiceAlias,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every resource kind served by the API group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
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
}

impl ResourceKind {
    /// All kinds, in declaration order
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::Service,
        ResourceKind::ServiceAlias,
        ResourceKind::AddressGroup,
        ResourceKind::AddressGroupBinding,
        ResourceKind::AddressGroupPortMapping,
        ResourceKind::AddressGroupBindingPolicy,
        ResourceKind::RuleS2S,
        ResourceKind::IEAgAgRule,
        ResourceKind::Network,
        ResourceKind::NetworkBinding,
    ];

    /// The kind string as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Service => "Service",
            ResourceKind::ServiceAlias => "ServiceAlias",
            ResourceKind::AddressGroup => "AddressGroup",
            ResourceKind::AddressGroupBinding => "AddressGroupBinding",
            ResourceKind::AddressGroupPortMapping => "AddressGroupPortMapping",
            ResourceKind::AddressGroupBindingPolicy => "AddressGroupBindingPolicy",
            ResourceKind::RuleS2S => "RuleS2S",
            ResourceKind::IEAgAgRule => "IEAgAgRule",
            ResourceKind::Network => "Network",
            ResourceKind::NetworkBinding => "NetworkBinding",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind string names no known resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Common surface of every resource object
pub trait Resource {
    /// The kind of this resource type
    const KIND: ResourceKind;

    /// Whether objects of this kind live in a namespace
    const NAMESPACED: bool = true;

    fn metadata(&self) -> &ObjectMeta;
}

/// Any resource, tagged on the wire by its `kind` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AnyResource {
    Service(Service),
    ServiceAlias(ServiceAlias),
    AddressGroup(AddressGroup),
    AddressGroupBinding(AddressGroupBinding),
    AddressGroupPortMapping(AddressGroupPortMapping),
    AddressGroupBindingPolicy(AddressGroupBindingPolicy),
    RuleS2S(RuleS2S),
    IEAgAgRule(IEAgAgRule),
    Network(Network),
    NetworkBinding(NetworkBinding),
}

impl AnyResource {
    /// The declared kind of the wrapped resource
    pub fn kind(&self) -> ResourceKind {
        match self {
            AnyResource::Service(_) => ResourceKind::Service,
            AnyResource::ServiceAlias(_) => ResourceKind::ServiceAlias,
            AnyResource::AddressGroup(_) => ResourceKind::AddressGroup,
            AnyResource::AddressGroupBinding(_) => ResourceKind::AddressGroupBinding,
            AnyResource::AddressGroupPortMapping(_) => ResourceKind::AddressGroupPortMapping,
            AnyResource::AddressGroupBindingPolicy(_) => ResourceKind::AddressGroupBindingPolicy,
            AnyResource::RuleS2S(_) => ResourceKind::RuleS2S,
            AnyResource::IEAgAgRule(_) => ResourceKind::IEAgAgRule,
            AnyResource::Network(_) => ResourceKind::Network,
            AnyResource::NetworkBinding(_) => ResourceKind::NetworkBinding,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            AnyResource::Service(r) => r.metadata(),
            AnyResource::ServiceAlias(r) => r.metadata(),
            AnyResource::AddressGroup(r) => r.metadata(),
            AnyResource::AddressGroupBinding(r) => r.metadata(),
            AnyResource::AddressGroupPortMapping(r) => r.metadata(),
            AnyResource::AddressGroupBindingPolicy(r) => r.metadata(),
            AnyResource::RuleS2S(r) => r.metadata(),
            AnyResource::IEAgAgRule(r) => r.metadata(),
            AnyResource::Network(r) => r.metadata(),
            AnyResource::NetworkBinding(r) => r.metadata(),
        }
    }
}

macro_rules! impl_from_resource {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl From<$kind> for AnyResource {
                fn from(resource: $kind) -> Self {
                    AnyResource::$kind(resource)
                }
            }
        )+
    };
}

impl_from_resource!(
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
