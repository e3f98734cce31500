use serde::Serialize;
use std::net::Ipv4Addr;

/// A device found on the local subnet with the probed service port open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    pub ip: Ipv4Addr,
    pub mac: String,
    pub vendor: String,
}

impl HostRecord {
    pub fn new(ip: Ipv4Addr, mac: &str, vendor: &str) -> Self {
        Self {
            ip,
            mac: normalize_mac(mac),
            vendor: vendor.trim().to_string(),
        }
    }
}

/// Lowercase a MAC address string as reported by system tools.
pub fn normalize_mac(mac: &str) -> String {
    mac.trim().to_lowercase()
}
