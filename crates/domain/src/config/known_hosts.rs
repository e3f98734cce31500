use serde::{Deserialize, Serialize};

pub const SUPPORTED_KEY_TYPES: &[&str] = &["rsa", "ecdsa", "ed25519"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KnownHostsConfig {
    /// Trust store location; `~/.ssh/known_hosts` of the service user when unset
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_key_type")]
    pub key_type: String,
}

impl Default for KnownHostsConfig {
    fn default() -> Self {
        Self {
            path: None,
            key_type: default_key_type(),
        }
    }
}

fn default_key_type() -> String {
    "rsa".to_string()
}
