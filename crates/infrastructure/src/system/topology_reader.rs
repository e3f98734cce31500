use async_trait::async_trait;
use lanscout_application::ports::{CommandRunner, TopologyReader};
use lanscout_domain::{route_interface_names, DomainError, NetworkInterface};
use std::sync::Arc;
use tracing::debug;

use super::parsers::{decode_interfaces, decode_routes};

/// Reads routes and interfaces through iproute2's JSON output.
pub struct IpTopologyReader {
    runner: Arc<dyn CommandRunner>,
    program: String,
    excluded_prefixes: Vec<String>,
}

impl IpTopologyReader {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        program: String,
        excluded_prefixes: Vec<String>,
    ) -> Self {
        Self {
            runner,
            program,
            excluded_prefixes,
        }
    }

    fn is_candidate(&self, iface: &NetworkInterface) -> bool {
        if iface.has_excluded_prefix(&self.excluded_prefixes) {
            debug!(interface = %iface.name, "Ignoring interface with excluded prefix");
            return false;
        }
        if !iface.has_carrier() {
            debug!(interface = %iface.name, "Ignoring interface without carrier");
            return false;
        }
        if iface.addresses.is_empty() {
            debug!(interface = %iface.name, "Ignoring interface without IPv4 address");
            return false;
        }
        true
    }
}

#[async_trait]
impl TopologyReader for IpTopologyReader {
    async fn list_default_route_interfaces(&self) -> Result<Vec<String>, DomainError> {
        let args = ["-j", "route", "list", "default"].map(String::from);
        let output = self.runner.run(&self.program, &args).await?;

        let routes = decode_routes(&output)?;
        let names = route_interface_names(&routes);

        debug!(routes = routes.len(), interfaces = ?names, "Default routes read");
        Ok(names)
    }

    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        let args = ["-j", "-family", "inet", "addr", "show"].map(String::from);
        let output = self.runner.run(&self.program, &args).await?;

        let interfaces: Vec<NetworkInterface> = decode_interfaces(&output)?
            .into_iter()
            .filter(|iface| self.is_candidate(iface))
            .collect();

        debug!(count = interfaces.len(), "Candidate interfaces read");
        Ok(interfaces)
    }
}
