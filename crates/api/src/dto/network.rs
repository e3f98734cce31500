use lanscout_domain::{DomainError, HostRecord, InterfaceClassification, NetworkInterface};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IpResponse {
    pub ip: String,
}

#[derive(Debug, Serialize)]
pub struct MacResponse {
    pub mac: String,
}

#[derive(Debug, Serialize)]
pub struct HostResponse {
    pub ip: String,
    pub mac: String,
    pub vendor: String,
}

impl From<HostRecord> for HostResponse {
    fn from(host: HostRecord) -> Self {
        Self {
            ip: host.ip.to_string(),
            mac: host.mac,
            vendor: host.vendor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalInterfaceResponse {
    pub name: String,
    pub address: String,
    pub cidr: String,
}

impl LocalInterfaceResponse {
    pub fn from_interface(iface: &NetworkInterface) -> Result<Self, DomainError> {
        let assignment = iface.primary_assignment()?;

        Ok(Self {
            name: iface.name.clone(),
            address: assignment.local.to_string(),
            cidr: assignment.network()?.to_string(),
        })
    }
}

/// Interface split as seen by discovery: names behind a default route, and
/// candidate local links with their primary address.
#[derive(Debug, Serialize)]
pub struct TopologyResponse {
    pub external: Vec<String>,
    pub local: Vec<LocalInterfaceResponse>,
}

impl TopologyResponse {
    pub fn from_classification(classification: &InterfaceClassification) -> Result<Self, DomainError> {
        let local = classification
            .local
            .iter()
            .map(LocalInterfaceResponse::from_interface)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            external: classification.external_names(),
            local,
        })
    }
}
