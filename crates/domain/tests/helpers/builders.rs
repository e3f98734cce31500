#![allow(dead_code)]
use lanscout_domain::{AddressAssignment, AddressFamily, NetworkInterface};
use std::net::IpAddr;

pub struct InterfaceBuilder {
    index: u32,
    name: String,
    flags: Vec<String>,
    addresses: Vec<AddressAssignment>,
}

impl InterfaceBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            index: 2,
            name: name.to_string(),
            flags: vec![
                "BROADCAST".to_string(),
                "MULTICAST".to_string(),
                "UP".to_string(),
                "LOWER_UP".to_string(),
            ],
            addresses: Vec::new(),
        }
    }

    pub fn index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.flags.push(flag.to_string());
        self
    }

    pub fn address(mut self, local: &str, prefix_len: u8) -> Self {
        self.addresses.push(AddressAssignment {
            family: AddressFamily::Inet,
            local: local.parse::<IpAddr>().unwrap(),
            prefix_len,
            broadcast: None,
            scope: Some("global".to_string()),
            label: Some(self.name.clone()),
            valid_lifetime: None,
            preferred_lifetime: None,
        });
        self
    }

    pub fn build(self) -> NetworkInterface {
        NetworkInterface {
            index: self.index,
            name: self.name,
            flags: self.flags,
            mtu: Some(1500),
            qdisc: Some("fq_codel".to_string()),
            oper_state: Some("UP".to_string()),
            group: Some("default".to_string()),
            tx_queue_len: Some(1000),
            addresses: self.addresses,
        }
    }
}
