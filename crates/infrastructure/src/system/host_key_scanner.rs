use async_trait::async_trait;
use lanscout_application::ports::{CommandRunner, HostKeyScanner};
use lanscout_domain::{DomainError, KnownHostAddress};
use std::sync::Arc;
use tracing::debug;

pub struct SshKeyscanHostKeyScanner {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl SshKeyscanHostKeyScanner {
    pub fn new(runner: Arc<dyn CommandRunner>, program: String) -> Self {
        Self { runner, program }
    }
}

#[async_trait]
impl HostKeyScanner for SshKeyscanHostKeyScanner {
    async fn fetch(
        &self,
        address: &KnownHostAddress,
        key_type: &str,
    ) -> Result<Vec<String>, DomainError> {
        let args = vec!["-t".to_string(), key_type.to_string(), address.to_string()];
        let output = self.runner.run(&self.program, &args).await?;

        // ssh-keyscan exits 0 even when the host did not answer.
        let lines: Vec<String> = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            return Err(DomainError::HostKeyUnavailable {
                address: address.to_string(),
                key_type: key_type.to_string(),
            });
        }

        debug!(address = %address, key_type, keys = lines.len(), "Host keys fetched");
        Ok(lines)
    }
}
