use crate::{DomainError, NetworkInterface};
use serde::{Deserialize, Serialize};

/// Interfaces split by whether they carry a default route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceClassification {
    pub external: Vec<NetworkInterface>,
    pub local: Vec<NetworkInterface>,
}

impl InterfaceClassification {
    pub fn classify(default_route_interfaces: &[String], interfaces: Vec<NetworkInterface>) -> Self {
        let (external, local) = interfaces
            .into_iter()
            .partition(|iface| default_route_interfaces.contains(&iface.name));

        Self { external, local }
    }

    pub fn local_names(&self) -> Vec<String> {
        self.local.iter().map(|iface| iface.name.clone()).collect()
    }

    pub fn external_names(&self) -> Vec<String> {
        self.external.iter().map(|iface| iface.name.clone()).collect()
    }

    /// The one interface facing the private subnet. Zero or several is an error.
    pub fn single_local(&self) -> Result<&NetworkInterface, DomainError> {
        match self.local.as_slice() {
            [] => Err(DomainError::NoLocalSubnet),
            [only] => Ok(only),
            _ => Err(DomainError::AmbiguousLocalSubnet(self.local_names())),
        }
    }

    pub fn primary_local(&self, policy: PrimaryAddressPolicy) -> Result<&NetworkInterface, DomainError> {
        match policy {
            PrimaryAddressPolicy::Strict => self.single_local(),
            PrimaryAddressPolicy::LastWins => self.local.last().ok_or(DomainError::NoLocalSubnet),
        }
    }
}

/// How the primary local address is chosen when several local interfaces exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAddressPolicy {
    #[default]
    Strict,
    LastWins,
}
