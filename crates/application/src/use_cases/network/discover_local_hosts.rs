use crate::ports::{SubnetScanner, TopologyReader};
use lanscout_domain::{DomainError, HostRecord};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: list devices on the single private subnet of this host
///
/// Fails instead of guessing when the host has zero or several candidate subnets.
pub struct DiscoverLocalHostsUseCase {
    topology: Arc<dyn TopologyReader>,
    scanner: Arc<dyn SubnetScanner>,
}

impl DiscoverLocalHostsUseCase {
    pub fn new(topology: Arc<dyn TopologyReader>, scanner: Arc<dyn SubnetScanner>) -> Self {
        Self { topology, scanner }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<HostRecord>, DomainError> {
        let classification = super::read_classification(self.topology.as_ref()).await?;

        let local = classification.single_local()?;
        let network = local.primary_assignment()?.network()?;

        info!(interface = %local.name, subnet = %network, "Scanning local subnet");

        let hosts = self.scanner.scan(network).await?;

        info!(subnet = %network, hosts = hosts.len(), "Local subnet scan finished");
        Ok(hosts)
    }
}
