//! Lanscout Domain Layer
pub mod config;
pub mod errors;
pub mod host_record;
pub mod interface_classification;
pub mod known_host;
pub mod network_interface;
pub mod route;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use host_record::{normalize_mac, HostRecord};
pub use interface_classification::{InterfaceClassification, PrimaryAddressPolicy};
pub use known_host::KnownHostAddress;
pub use network_interface::{AddressAssignment, AddressFamily, NetworkInterface, NO_CARRIER_FLAG};
pub use route::{route_interface_names, Route};
