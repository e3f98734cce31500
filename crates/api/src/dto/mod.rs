pub mod network;

pub use network::{HostResponse, IpResponse, LocalInterfaceResponse, MacResponse, TopologyResponse};
