use async_trait::async_trait;
use lanscout_domain::{DomainError, KnownHostAddress};
use std::path::Path;

#[async_trait]
pub trait KnownHostsStore: Send + Sync {
    fn path(&self) -> &Path;

    /// Create the trust store if absent. An existing file is left untouched.
    async fn ensure_exists(&self) -> Result<(), DomainError>;

    /// Drop every line keyed by `address`, returning how many were removed.
    async fn remove_entries(&self, address: &KnownHostAddress) -> Result<usize, DomainError>;

    async fn append_entries(&self, lines: &[String]) -> Result<(), DomainError>;
}
