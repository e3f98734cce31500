use async_trait::async_trait;
use lanscout_application::ports::KnownHostsStore;
use lanscout_domain::{DomainError, KnownHostAddress};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// `~/.ssh/known_hosts` of the user running the service.
pub fn default_known_hosts_path() -> Result<PathBuf, DomainError> {
    dirs::home_dir()
        .map(|home| home.join(".ssh").join("known_hosts"))
        .ok_or_else(|| DomainError::Io("Cannot determine home directory".to_string()))
}

/// OpenSSH known_hosts file edited in place.
pub struct FileKnownHostsStore {
    path: PathBuf,
}

impl FileKnownHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Io(format!("Failed to {} {}: {}", action, self.path.display(), e))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("known_hosts"));
        name.push(".lanscout.tmp");
        self.path.with_file_name(name)
    }

    async fn read_contents(&self) -> Result<String, DomainError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.io_error("read", e)),
        }
    }
}

#[async_trait]
impl KnownHostsStore for FileKnownHostsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_exists(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("create parent of", e))?;
        }

        let created = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await;

        match created {
            Ok(_) => {
                info!(path = %self.path.display(), "Created known_hosts file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(self.io_error("create", e)),
        }
    }

    async fn remove_entries(&self, address: &KnownHostAddress) -> Result<usize, DomainError> {
        let contents = self.read_contents().await?;

        let mut removed = 0;
        let mut kept = String::with_capacity(contents.len());
        for line in contents.lines() {
            if address.keys_line(line) {
                removed += 1;
            } else {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        if removed == 0 {
            return Ok(0);
        }

        let staging = self.staging_path();
        fs::write(&staging, kept)
            .await
            .map_err(|e| self.io_error("stage rewrite of", e))?;
        if let Ok(metadata) = fs::metadata(&self.path).await {
            fs::set_permissions(&staging, metadata.permissions())
                .await
                .map_err(|e| self.io_error("copy permissions of", e))?;
        }
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.io_error("replace", e))?;

        debug!(address = %address, removed, "Removed known_hosts entries");
        Ok(removed)
    }

    async fn append_entries(&self, lines: &[String]) -> Result<(), DomainError> {
        if lines.is_empty() {
            return Ok(());
        }

        let existing = self.read_contents().await?;
        let mut buffer = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            buffer.push('\n');
        }
        for line in lines {
            buffer.push_str(line.trim_end());
            buffer.push('\n');
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(buffer.as_bytes())
            .await
            .map_err(|e| self.io_error("append to", e))?;
        file.flush().await.map_err(|e| self.io_error("flush", e))?;

        debug!(lines = lines.len(), path = %self.path.display(), "Appended known_hosts entries");
        Ok(())
    }
}
