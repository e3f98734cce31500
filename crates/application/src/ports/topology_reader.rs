use async_trait::async_trait;
use lanscout_domain::{DomainError, NetworkInterface};

#[async_trait]
pub trait TopologyReader: Send + Sync {
    /// Names of interfaces carrying a default route, deduplicated, first-seen order.
    async fn list_default_route_interfaces(&self) -> Result<Vec<String>, DomainError>;

    /// Active IPv4 interfaces, already stripped of loopback/tunnel/bridge and link-down entries.
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError>;
}
