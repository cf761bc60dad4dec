//! One validator per resource kind
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

pub mod address_group;
pub mod network;
pub mod rules;
pub mod service;

pub use address_group::{
    AddressGroupBindingPolicyValidator, AddressGroupBindingValidator, AddressGroupPortMappingValidator,
    AddressGroupValidator,
};
pub use network::{NetworkBindingValidator, NetworkValidator};
pub use rules::{IEAgAgRuleValidator, RuleS2SValidator};
pub use service::{ServiceAliasValidator, ServiceValidator};
