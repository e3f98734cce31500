#![allow(dead_code)]
use async_trait::async_trait;
use lanscout_application::ports::CommandRunner;
use lanscout_domain::DomainError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers commands from a table keyed by the full command line.
#[derive(Default)]
pub struct ScriptedCommandRunner {
    responses: Mutex<HashMap<String, Result<String, DomainError>>>,
    invocations: Mutex<Vec<String>>,
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

    pub fn fail(self, command_line: &str, error: DomainError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(command_line.to_string(), Err(error));
        self
    }

    pub fn invocations(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, DomainError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.invocations.lock().unwrap().push(line.clone());

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

pub const DEFAULT_ROUTES_JSON: &str = r#"[
  {"dst":"default","gateway":"192.168.1.1","dev":"eth0","protocol":"dhcp","metric":100,"flags":[]},
  {"dst":"default","gateway":"192.168.1.1","dev":"eth0","protocol":"dhcp","metric":600,"flags":[]},
  {"dst":"default","gateway":"10.8.0.1","dev":"wlan0","protocol":"dhcp","metric":700,"flags":[]}
]"#;

pub const ADDR_SHOW_JSON: &str = r#"[
  {"ifindex":1,"ifname":"lo","flags":["LOOPBACK","UP","LOWER_UP"],"mtu":65536,"qdisc":"noqueue","operstate":"UNKNOWN","group":"default","txqlen":1000,
   "addr_info":[{"family":"inet","local":"127.0.0.1","prefixlen":8,"scope":"host","label":"lo","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":2,"ifname":"eth0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],"mtu":1500,"qdisc":"fq_codel","operstate":"UP","group":"default","txqlen":1000,
   "addr_info":[{"family":"inet","local":"192.168.1.20","prefixlen":24,"broadcast":"192.168.1.255","scope":"global","dynamic":true,"label":"eth0","valid_life_time":86000,"preferred_life_time":86000}]},
  {"ifindex":3,"ifname":"wlan0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],"mtu":1500,"qdisc":"noqueue","operstate":"UP","group":"default","txqlen":1000,
   "addr_info":[{"family":"inet","local":"10.8.0.5","prefixlen":24,"broadcast":"10.8.0.255","scope":"global","label":"wlan0","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":4,"ifname":"eth1","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],"mtu":1500,"qdisc":"fq_codel","operstate":"UP","group":"default","txqlen":1000,
   "addr_info":[{"family":"inet","local":"172.16.5.1","prefixlen":16,"broadcast":"172.16.255.255","scope":"global","label":"eth1","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":5,"ifname":"eth2","flags":["NO-CARRIER","BROADCAST","MULTICAST","UP"],"mtu":1500,"qdisc":"fq_codel","operstate":"DOWN","group":"default","txqlen":1000,
   "addr_info":[{"family":"inet","local":"172.17.0.1","prefixlen":16,"scope":"global","label":"eth2","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":6,"ifname":"docker0","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],"mtu":1500,"qdisc":"noqueue","operstate":"UP","group":"default","txqlen":0,
   "addr_info":[{"family":"inet","local":"172.18.0.1","prefixlen":16,"scope":"global","label":"docker0","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":7,"ifname":"tun0","flags":["POINTOPOINT","MULTICAST","NOARP","UP","LOWER_UP"],"mtu":1500,"qdisc":"fq_codel","operstate":"UNKNOWN","group":"default","txqlen":500,
   "addr_info":[{"family":"inet","local":"10.99.0.2","prefixlen":24,"scope":"global","label":"tun0","valid_life_time":4294967295,"preferred_life_time":4294967295}]},
  {"ifindex":8,"ifname":"eth3","flags":["BROADCAST","MULTICAST","UP","LOWER_UP"],"mtu":1500,"qdisc":"fq_codel","operstate":"UP","group":"default","txqlen":1000,"addr_info":[]}
]"#;

pub const NMAP_REPORT: &str = "Starting Nmap 7.94 ( https://nmap.org ) at 2026-10-18 10:00 UTC
Nmap scan report for 172.16.0.1
Host is up (0.00040s latency).

PORT   STATE SERVICE
22/tcp open  ssh
MAC Address: B8:27:EB:12:34:56 (Raspberry Pi Foundation)

Nmap scan report for 172.16.0.7
Host is up (0.00061s latency).

PORT   STATE SERVICE
22/tcp open  ssh
MAC Address: 00:1A:2B:3C:4D:5E (Unknown)

Nmap scan report for 172.16.5.1
Host is up.

PORT   STATE SERVICE
22/tcp open  ssh

Nmap done: 65536 IP addresses (3 hosts up) scanned in 41.20 seconds
";

pub const ARP_TABLE: &str = "Address                  HWtype  HWaddress           Flags Mask            Iface
192.168.1.1              ether   a4:91:b1:00:11:22   C                     eth0
192.168.1.42             ether   b8:27:eb:aa:bb:cc   C                     eth0
192.168.1.50                     (incomplete)                              eth0
";
