use async_trait::async_trait;
use lanscout_domain::DomainError;

/// Runs an external program to completion and hands back its stdout.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, DomainError>;
}
