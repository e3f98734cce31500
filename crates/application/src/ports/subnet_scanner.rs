use async_trait::async_trait;
use ipnetwork::IpNetwork;
use lanscout_domain::{DomainError, HostRecord};

#[async_trait]
pub trait SubnetScanner: Send + Sync {
    async fn scan(&self, network: IpNetwork) -> Result<Vec<HostRecord>, DomainError>;
}
