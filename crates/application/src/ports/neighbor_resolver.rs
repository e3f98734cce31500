use async_trait::async_trait;
use lanscout_domain::DomainError;

/// Lookups against the system neighbor (ARP) cache.
#[async_trait]
pub trait NeighborResolver: Send + Sync {
    async fn ip_for_mac(&self, mac: &str) -> Result<String, DomainError>;

    async fn mac_for_ip(&self, ip: &str) -> Result<String, DomainError>;
}
