#![allow(dead_code)]
use apexdns_domain::{parse_record, DnsRecord, DomainName, Zone};
use std::net::SocketAddr;

pub fn name(text: &str) -> DomainName {
    DomainName::parse(text).unwrap()
}

pub fn record(text: &str) -> DnsRecord {
    parse_record(text).unwrap()
}

/// Zone fixture defaulting to `example.org.` with one NS and one glue record.
pub struct ZoneBuilder {
    name: String,
    upstream: SocketAddr,
    soa: String,
    ns: Vec<String>,
    glue: Vec<String>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.org".to_string(),
            upstream: "10.0.0.2:53".parse().unwrap(),
            soa: "example.org 60 IN SOA ns1.example.org hostmaster.example.org 1 7200 900 1209600 86400"
                .to_string(),
            ns: vec!["example.org 60 IN NS ns1.example.org".to_string()],
            glue: vec!["ns1.example.org 60 IN A 192.168.0.1".to_string()],
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn upstream(mut self, upstream: &str) -> Self {
        self.upstream = upstream.parse().unwrap();
        self
    }

    pub fn soa(mut self, soa: &str) -> Self {
        self.soa = soa.to_string();
        self
    }

    pub fn ns(mut self, ns: &[&str]) -> Self {
        self.ns = ns.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn glue(mut self, glue: &[&str]) -> Self {
        self.glue = glue.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn try_build(self) -> Result<Zone, apexdns_domain::ZoneError> {
        Zone::new(
            name(&self.name),
            self.upstream,
            record(&self.soa),
            self.ns.iter().map(|s| record(s)).collect(),
            self.glue.iter().map(|s| record(s)).collect(),
        )
    }

    pub fn build(self) -> Zone {
        self.try_build().unwrap()
    }
}

impl Default for ZoneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
