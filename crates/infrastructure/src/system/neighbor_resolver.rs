use async_trait::async_trait;
use lanscout_application::ports::{CommandRunner, NeighborResolver};
use lanscout_domain::DomainError;
use std::sync::Arc;

use super::parsers::{find_ip_for_mac, find_mac_for_ip};

/// Looks addresses up in the kernel neighbor cache via `arp -ne`.
pub struct ArpNeighborResolver {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl ArpNeighborResolver {
    pub fn new(runner: Arc<dyn CommandRunner>, program: String) -> Self {
        Self { runner, program }
    }

    async fn read_table(&self) -> Result<String, DomainError> {
        self.runner.run(&self.program, &["-ne".to_string()]).await
    }
}

#[async_trait]
impl NeighborResolver for ArpNeighborResolver {
    async fn ip_for_mac(&self, mac: &str) -> Result<String, DomainError> {
        let table = self.read_table().await?;
        find_ip_for_mac(&table, mac)?.ok_or_else(|| DomainError::IpAddressNotFound(mac.to_string()))
    }

    async fn mac_for_ip(&self, ip: &str) -> Result<String, DomainError> {
        let table = self.read_table().await?;
        find_mac_for_ip(&table, ip)?.ok_or_else(|| DomainError::MacAddressNotFound(ip.to_string()))
    }
}
