use lanscout_application::ports::{
    CommandRunner, HostKeyScanner, KnownHostsStore, NeighborResolver, SubnetScanner,
    TopologyReader,
};
use lanscout_domain::{Config, DomainError};
use lanscout_infrastructure::system::{
    default_known_hosts_path, ArpNeighborResolver, FileKnownHostsStore, IpTopologyReader,
    NmapSubnetScanner, ProcessCommandRunner, SshKeyscanHostKeyScanner,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct Adapters {
    pub topology: Arc<dyn TopologyReader>,
    pub scanner: Arc<dyn SubnetScanner>,
    pub resolver: Arc<dyn NeighborResolver>,
    pub key_scanner: Arc<dyn HostKeyScanner>,
    pub known_hosts: Arc<dyn KnownHostsStore>,
}

impl Adapters {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let runner: Arc<dyn CommandRunner> = Arc::new(ProcessCommandRunner::new());
        let tools = &config.tools;

        let known_hosts_path = match &config.known_hosts.path {
            Some(path) => PathBuf::from(path),
            None => default_known_hosts_path()?,
        };
        info!(path = %known_hosts_path.display(), "Using known_hosts file");

        let sudo = config
            .discovery
            .scan_with_sudo
            .then(|| tools.sudo.clone());

        Ok(Self {
            topology: Arc::new(IpTopologyReader::new(
                runner.clone(),
                tools.ip.clone(),
                config.discovery.excluded_interface_prefixes.clone(),
            )),
            scanner: Arc::new(NmapSubnetScanner::new(
                runner.clone(),
                tools.nmap.clone(),
                sudo,
                config.discovery.scan_port,
            )),
            resolver: Arc::new(ArpNeighborResolver::new(runner.clone(), tools.arp.clone())),
            key_scanner: Arc::new(SshKeyscanHostKeyScanner::new(
                runner,
                tools.ssh_keyscan.clone(),
            )),
            known_hosts: Arc::new(FileKnownHostsStore::new(known_hosts_path)),
        })
    }
}
