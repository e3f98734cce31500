pub mod command_runner;
pub mod host_key_scanner;
pub mod known_hosts_store;
pub mod neighbor_resolver;
pub mod parsers;
pub mod subnet_scanner;
pub mod topology_reader;

pub use command_runner::ProcessCommandRunner;
pub use host_key_scanner::SshKeyscanHostKeyScanner;
pub use known_hosts_store::{default_known_hosts_path, FileKnownHostsStore};
pub use neighbor_resolver::ArpNeighborResolver;
pub use subnet_scanner::NmapSubnetScanner;
pub use topology_reader::IpTopologyReader;
