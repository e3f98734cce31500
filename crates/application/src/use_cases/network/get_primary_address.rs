use crate::ports::TopologyReader;
use lanscout_domain::{DomainError, PrimaryAddressPolicy};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: address of this host on its private subnet
pub struct GetPrimaryAddressUseCase {
    topology: Arc<dyn TopologyReader>,
    policy: PrimaryAddressPolicy,
}

impl GetPrimaryAddressUseCase {
    pub fn new(topology: Arc<dyn TopologyReader>, policy: PrimaryAddressPolicy) -> Self {
        Self { topology, policy }
    }

    #[instrument(skip(self), fields(policy = ?self.policy))]
    pub async fn execute(&self) -> Result<IpAddr, DomainError> {
        let classification = super::read_classification(self.topology.as_ref()).await?;

        let local = classification.primary_local(self.policy)?;
        let address = local.primary_assignment()?.local;

        debug!(interface = %local.name, address = %address, "Primary local address resolved");
        Ok(address)
    }
}
