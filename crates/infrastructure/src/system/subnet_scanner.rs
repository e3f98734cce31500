use async_trait::async_trait;
use ipnetwork::IpNetwork;
use lanscout_application::ports::{CommandRunner, SubnetScanner};
use lanscout_domain::{DomainError, HostRecord};
use std::sync::Arc;
use tracing::debug;

use super::parsers::parse_scan_report;

/// Probes a subnet with nmap for hosts that have one TCP port open.
pub struct NmapSubnetScanner {
    runner: Arc<dyn CommandRunner>,
    nmap: String,
    sudo: Option<String>,
    port: u16,
}

impl NmapSubnetScanner {
    pub fn new(runner: Arc<dyn CommandRunner>, nmap: String, sudo: Option<String>, port: u16) -> Self {
        Self {
            runner,
            nmap,
            sudo,
            port,
        }
    }

    fn command_line(&self, network: &IpNetwork) -> (String, Vec<String>) {
        let probe = vec![
            "-Pn".to_string(),
            format!("-p{}", self.port),
            "--open".to_string(),
            network.to_string(),
        ];

        match &self.sudo {
            Some(sudo) => {
                let mut args = Vec::with_capacity(probe.len() + 1);
                args.push(self.nmap.clone());
                args.extend(probe);
                (sudo.clone(), args)
            }
            None => (self.nmap.clone(), probe),
        }
    }
}

#[async_trait]
impl SubnetScanner for NmapSubnetScanner {
    async fn scan(&self, network: IpNetwork) -> Result<Vec<HostRecord>, DomainError> {
        let (program, args) = self.command_line(&network);
        let report = self.runner.run(&program, &args).await?;

        let hosts = parse_scan_report(&report)?;
        debug!(subnet = %network, port = self.port, hosts = hosts.len(), "Subnet scan parsed");

        Ok(hosts)
    }
}
