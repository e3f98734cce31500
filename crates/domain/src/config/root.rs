use serde::{Deserialize, Serialize};

use super::discovery::DiscoveryConfig;
use super::errors::ConfigError;
use super::known_hosts::{KnownHostsConfig, SUPPORTED_KEY_TYPES};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::tools::ToolsConfig;

const LOCAL_CONFIG_PATH: &str = "lanscout.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/lanscout/config.toml";

/// Main configuration structure for Lanscout
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// External tool locations
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Interface filtering and subnet scan settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub known_hosts: KnownHostsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. lanscout.toml in current directory
    /// 3. /etc/lanscout/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(path) = overrides.known_hosts_path {
            self.known_hosts.path = Some(path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.discovery.scan_port == 0 {
            return Err(ConfigError::Validation("Scan port cannot be 0".to_string()));
        }

        for (name, program) in self.tools.all() {
            if program.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Tool '{}' has an empty program name",
                    name
                )));
            }
        }

        if !SUPPORTED_KEY_TYPES.contains(&self.known_hosts.key_type.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unsupported host key type '{}' (expected one of {:?})",
                self.known_hosts.key_type, SUPPORTED_KEY_TYPES
            )));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub known_hosts_path: Option<String>,
}
