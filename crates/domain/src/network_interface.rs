use crate::DomainError;
use ipnetwork::IpNetwork;
use serde::Deserialize;
use std::net::IpAddr;

pub const NO_CARRIER_FLAG: &str = "NO-CARRIER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Inet,
    Inet6,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressAssignment {
    pub family: AddressFamily,
    pub local: IpAddr,
    #[serde(rename = "prefixlen")]
    pub prefix_len: u8,
    #[serde(default)]
    pub broadcast: Option<IpAddr>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "valid_life_time", default)]
    pub valid_lifetime: Option<u64>,
    #[serde(rename = "preferred_life_time", default)]
    pub preferred_lifetime: Option<u64>,
}

impl AddressAssignment {
    /// Host address with its prefix, e.g. `192.168.1.5/24`.
    pub fn network(&self) -> Result<IpNetwork, DomainError> {
        IpNetwork::new(self.local, self.prefix_len)
            .map_err(|e| DomainError::InvalidCidr(format!("{}/{}: {}", self.local, self.prefix_len, e)))
    }
}

/// A link as reported by `ip -j addr show`. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkInterface {
    #[serde(rename = "ifindex", default)]
    pub index: u32,
    #[serde(rename = "ifname", default)]
    pub name: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub mtu: Option<u32>,
    #[serde(default)]
    pub qdisc: Option<String>,
    #[serde(rename = "operstate", default)]
    pub oper_state: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(rename = "txqlen", default)]
    pub tx_queue_len: Option<u32>,
    #[serde(rename = "addr_info", default)]
    pub addresses: Vec<AddressAssignment>,
}

impl NetworkInterface {
    pub fn has_carrier(&self) -> bool {
        !self.flags.iter().any(|flag| flag == NO_CARRIER_FLAG)
    }

    pub fn has_excluded_prefix(&self, prefixes: &[String]) -> bool {
        prefixes
            .iter()
            .any(|prefix| self.name.starts_with(prefix.as_str()))
    }

    /// The representative address of the interface: the first one listed.
    pub fn primary_assignment(&self) -> Result<&AddressAssignment, DomainError> {
        self.addresses
            .first()
            .ok_or_else(|| DomainError::InterfaceWithoutAddress(self.name.clone()))
    }
}
