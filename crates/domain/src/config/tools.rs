use serde::{Deserialize, Serialize};

/// Program names (or absolute paths) of the external tools the service drives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default = "default_ip")]
    pub ip: String,

    #[serde(default = "default_arp")]
    pub arp: String,

    #[serde(default = "default_nmap")]
    pub nmap: String,

    #[serde(default = "default_sudo")]
    pub sudo: String,

    #[serde(default = "default_ssh_keyscan")]
    pub ssh_keyscan: String,
}

impl ToolsConfig {
    pub fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("ip", self.ip.as_str()),
            ("arp", self.arp.as_str()),
            ("nmap", self.nmap.as_str()),
            ("sudo", self.sudo.as_str()),
            ("ssh_keyscan", self.ssh_keyscan.as_str()),
        ]
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ip: default_ip(),
            arp: default_arp(),
            nmap: default_nmap(),
            sudo: default_sudo(),
            ssh_keyscan: default_ssh_keyscan(),
        }
    }
}

fn default_ip() -> String {
    "ip".to_string()
}

fn default_arp() -> String {
    "arp".to_string()
}

fn default_nmap() -> String {
    "nmap".to_string()
}

fn default_sudo() -> String {
    "sudo".to_string()
}

fn default_ssh_keyscan() -> String {
    "ssh-keyscan".to_string()
}
