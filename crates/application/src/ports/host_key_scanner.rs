use async_trait::async_trait;
use lanscout_domain::{DomainError, KnownHostAddress};

#[async_trait]
pub trait HostKeyScanner: Send + Sync {
    /// Known-hosts lines for `address`, as presented by the live host.
    async fn fetch(
        &self,
        address: &KnownHostAddress,
        key_type: &str,
    ) -> Result<Vec<String>, DomainError>;
}
