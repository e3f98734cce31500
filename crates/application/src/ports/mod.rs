mod command_runner;
mod host_key_scanner;
mod known_hosts_store;
mod neighbor_resolver;
mod subnet_scanner;
mod topology_reader;

pub use command_runner::CommandRunner;
pub use host_key_scanner::HostKeyScanner;
pub use known_hosts_store::KnownHostsStore;
pub use neighbor_resolver::NeighborResolver;
pub use subnet_scanner::SubnetScanner;
pub use topology_reader::TopologyReader;
