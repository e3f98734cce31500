pub mod discovery;
pub mod errors;
pub mod known_hosts;
pub mod logging;
pub mod root;
pub mod server;
pub mod tools;

pub use discovery::DiscoveryConfig;
pub use errors::ConfigError;
pub use known_hosts::KnownHostsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use tools::ToolsConfig;
