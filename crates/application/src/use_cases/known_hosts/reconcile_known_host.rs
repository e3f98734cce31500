use crate::ports::{HostKeyScanner, KnownHostsStore};
use lanscout_domain::{DomainError, KnownHostAddress};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Use case: replace the trusted host key of one address in known_hosts
///
/// After a successful run the store holds exactly the freshly scanned
/// entries for the address. Runs are serialised; there is no rollback when
/// the scan fails after the old entries were removed.
pub struct ReconcileKnownHostUseCase {
    store: Arc<dyn KnownHostsStore>,
    key_scanner: Arc<dyn HostKeyScanner>,
    key_type: String,
    edit_lock: Mutex<()>,
}

impl ReconcileKnownHostUseCase {
    pub fn new(
        store: Arc<dyn KnownHostsStore>,
        key_scanner: Arc<dyn HostKeyScanner>,
        key_type: String,
    ) -> Self {
        Self {
            store,
            key_scanner,
            key_type,
            edit_lock: Mutex::new(()),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ip_address: &str) -> Result<(), DomainError> {
        // Validate before anything touches the file or spawns a process.
        let address = KnownHostAddress::parse(ip_address).inspect_err(|e| {
            warn!(error = %e, "Rejected known-hosts reconciliation");
        })?;

        self.store.ensure_exists().await?;

        let _guard = self.edit_lock.lock().await;

        let removed = self.store.remove_entries(&address).await?;
        let lines = self.key_scanner.fetch(&address, &self.key_type).await?;
        self.store.append_entries(&lines).await?;

        info!(
            address = %address,
            key_type = %self.key_type,
            removed,
            added = lines.len(),
            path = %self.store.path().display(),
            "Known host entry replaced"
        );

        Ok(())
    }
}
