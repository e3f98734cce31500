use crate::ports::NeighborResolver;
use lanscout_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ResolveAddressUseCase {
    resolver: Arc<dyn NeighborResolver>,
}

impl ResolveAddressUseCase {
    pub fn new(resolver: Arc<dyn NeighborResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn ip_for_mac(&self, mac: &str) -> Result<String, DomainError> {
        let mac = mac.trim().to_lowercase();
        let ip = self.resolver.ip_for_mac(&mac).await?;

        debug!(mac = %mac, ip = %ip, "Resolved IP from neighbor cache");
        Ok(ip)
    }

    #[instrument(skip(self))]
    pub async fn mac_for_ip(&self, ip: &str) -> Result<String, DomainError> {
        let ip = ip.trim().to_lowercase();
        let mac = self.resolver.mac_for_ip(&ip).await?.to_lowercase();

        debug!(ip = %ip, mac = %mac, "Resolved MAC from neighbor cache");
        Ok(mac)
    }
}
