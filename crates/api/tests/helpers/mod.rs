#![allow(dead_code)]
use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use lanscout_api::{create_api_routes, AppState};
use lanscout_application::{
    ports::CommandRunner,
    use_cases::{
        DiscoverLocalHostsUseCase, GetPrimaryAddressUseCase, GetTopologyUseCase,
        ReconcileKnownHostUseCase, ResolveAddressUseCase,
    },
};
use lanscout_domain::{DomainError, PrimaryAddressPolicy};
use lanscout_infrastructure::system::{
    ArpNeighborResolver, FileKnownHostsStore, IpTopologyReader, NmapSubnetScanner,
    SshKeyscanHostKeyScanner,
};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const ROUTES: &str = "ip -j route list default";
pub const ADDRESSES: &str = "ip -j -family inet addr show";
pub const ARP: &str = "arp -ne";

pub const DEFAULT_ROUTE_ETH0: &str =
    r#"[{"dst":"default","gateway":"192.168.1.1","dev":"eth0","metric":100,"flags":[]}]"#;

pub const ETH0_AND_ETH1: &str = r#"[
  {"ifindex":1,"ifname":"lo","flags":["LOOPBACK","UP"],"addr_info":[{"family":"inet","local":"127.0.0.1","prefixlen":8}]},
  {"ifindex":2,"ifname":"eth0","flags":["UP","LOWER_UP"],"addr_info":[{"family":"inet","local":"192.168.1.20","prefixlen":24}]},
  {"ifindex":3,"ifname":"eth1","flags":["UP","LOWER_UP"],"addr_info":[{"family":"inet","local":"172.16.5.1","prefixlen":16}]}
]"#;

pub const ETH0_ETH1_ETH2: &str = r#"[
  {"ifindex":2,"ifname":"eth0","flags":["UP","LOWER_UP"],"addr_info":[{"family":"inet","local":"192.168.1.20","prefixlen":24}]},
  {"ifindex":3,"ifname":"eth1","flags":["UP","LOWER_UP"],"addr_info":[{"family":"inet","local":"172.16.5.1","prefixlen":16}]},
  {"ifindex":4,"ifname":"eth2","flags":["UP","LOWER_UP"],"addr_info":[{"family":"inet","local":"10.1.0.1","prefixlen":24}]}
]"#;

pub const NMAP_REPORT: &str = "Starting Nmap 7.94 ( https://nmap.org )
Nmap scan report for 172.16.0.7
Host is up (0.00061s latency).

PORT   STATE SERVICE
22/tcp open  ssh
MAC Address: 00:1A:2B:3C:4D:5E (Raspberry Pi Trading)

Nmap done: 65536 IP addresses (1 host up) scanned in 30.00 seconds
";

pub const ARP_TABLE: &str = "Address                  HWtype  HWaddress           Flags Mask            Iface
172.16.0.7               ether   00:1a:2b:3c:4d:5e   C                     eth1
";

#[derive(Default)]
pub struct ScriptedCommandRunner {
    responses: Mutex<HashMap<String, Result<String, DomainError>>>,
}

impl ScriptedCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }
}

#[async_trait]
impl CommandRunner for ScriptedCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, DomainError> {
        let line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.responses
            .lock()
            .unwrap()
            .get(&line)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::CommandFailed {
                    program: program.to_string(),
                    status: "exit status: 127".to_string(),
                    stderr: format!("unscripted command: {}", line),
                })
            })
    }
}

pub fn create_test_app(runner: ScriptedCommandRunner, known_hosts: &Path) -> Router {
    let runner: Arc<dyn CommandRunner> = Arc::new(runner);
    let excluded = vec!["lo".to_string(), "tun".to_string(), "docker".to_string()];

    let topology = Arc::new(IpTopologyReader::new(runner.clone(), "ip".to_string(), excluded));
    let scanner = Arc::new(NmapSubnetScanner::new(
        runner.clone(),
        "nmap".to_string(),
        Some("sudo".to_string()),
        22,
    ));
    let resolver = Arc::new(ArpNeighborResolver::new(runner.clone(), "arp".to_string()));
    let key_scanner = Arc::new(SshKeyscanHostKeyScanner::new(
        runner,
        "ssh-keyscan".to_string(),
    ));
    let store = Arc::new(FileKnownHostsStore::new(known_hosts));

    let state = AppState {
        get_topology: Arc::new(GetTopologyUseCase::new(topology.clone())),
        get_primary_address: Arc::new(GetPrimaryAddressUseCase::new(
            topology.clone(),
            PrimaryAddressPolicy::Strict,
        )),
        discover_hosts: Arc::new(DiscoverLocalHostsUseCase::new(topology, scanner)),
        resolve_address: Arc::new(ResolveAddressUseCase::new(resolver)),
        reconcile_known_host: Arc::new(ReconcileKnownHostUseCase::new(
            store,
            key_scanner,
            "rsa".to_string(),
        )),
    };

    create_api_routes(state)
}

pub async fn send(app: Router, method: &str, uri: &str) -> (u16, Option<Value>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).ok();

    (status, body)
}
