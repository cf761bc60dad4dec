//! Port descriptions used by services, port mappings and rules
//!
//! Copyright (c) 2025 Netguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Inclusive range of ports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PortRange {
    pub from: i32,
    pub to: i32,
}

impl PortRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// A range covering exactly one port
    pub fn single(port: i32) -> Self {
        Self { from: port, to: port }
    }
}

/// A port entry of a rule: either a single port or a range
///
/// A `port` of `0` means the single-port form is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortSpec {
    #[serde(skip_serializing_if = "is_unset_port")]
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range: Option<PortRange>,
}

fn is_unset_port(port: &i32) -> bool {
    *port == 0
}

impl PortSpec {
    pub fn single(port: i32) -> Self {
        Self {
            port,
            port_range: None,
        }
    }

    pub fn range(from: i32, to: i32) -> Self {
        Self {
            port: 0,
            port_range: Some(PortRange::new(from, to)),
        }
    }

    /// Whether the single-port form is present
    pub fn has_port(&self) -> bool {
        self.port != 0
    }
}

/// Port exposed by a service, written as `"N"` or `"N-M"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngressPort {
    pub protocol: String,
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl IngressPort {
    pub fn new(protocol: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            port: port.into(),
            description: String::new(),
        }
    }
}

/// A port written as text with an optional description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortConfig {
    pub port: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl PortConfig {
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            description: String::new(),
        }
    }
}

/// Ports grouped by transport protocol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolPorts {
    #[serde(rename = "TCP", skip_serializing_if = "Vec::is_empty")]
    pub tcp: Vec<PortConfig>,
    #[serde(rename = "UDP", skip_serializing_if = "Vec::is_empty")]
    pub udp: Vec<PortConfig>,
}

impl ProtocolPorts {
    /// Iterate over `(protocol, ports)` pairs in a fixed order
    pub fn by_protocol(&self) -> [(&'static str, &[PortConfig]); 2] {
        [("TCP", self.tcp.as_slice()), ("UDP", self.udp.as_slice())]
    }
}
