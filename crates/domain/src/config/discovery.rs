use crate::PrimaryAddressPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Interfaces whose name starts with one of these never take part in classification
    #[serde(default = "default_excluded_interface_prefixes")]
    pub excluded_interface_prefixes: Vec<String>,

    /// TCP port a host must have open to be reported by the subnet scan
    #[serde(default = "default_scan_port")]
    pub scan_port: u16,

    /// Run the subnet probe through the privilege-escalation tool
    #[serde(default = "default_true")]
    pub scan_with_sudo: bool,

    #[serde(default)]
    pub primary_address_policy: PrimaryAddressPolicy,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            excluded_interface_prefixes: default_excluded_interface_prefixes(),
            scan_port: default_scan_port(),
            scan_with_sudo: true,
            primary_address_policy: PrimaryAddressPolicy::default(),
        }
    }
}

fn default_excluded_interface_prefixes() -> Vec<String> {
    vec!["lo".to_string(), "tun".to_string(), "docker".to_string()]
}

fn default_scan_port() -> u16 {
    22
}

fn default_true() -> bool {
    true
}
