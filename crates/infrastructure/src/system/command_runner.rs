use async_trait::async_trait;
use lanscout_application::ports::CommandRunner;
use lanscout_domain::DomainError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

/// Spawns external tools with no stdin and waits for them to exit.
#[derive(Debug, Default, Clone)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, DomainError> {
        debug!(program, args = %args.join(" "), "Running command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                error!(program, error = %e, "Failed to spawn command");
                DomainError::CommandSpawn {
                    program: program.to_string(),
                    reason: e.to_string(),
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(
                program,
                status = %output.status,
                stderr = %stderr,
                "Command failed"
            );
            return Err(DomainError::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
