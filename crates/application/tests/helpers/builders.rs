#![allow(dead_code)]
use apexdns_domain::config::ZoneConfig;
use apexdns_domain::{parse_record, DnsQuery, DnsRecord, DomainName, RecordType, Zone, ZoneTable};
use std::sync::Arc;

pub const UPSTREAM: &str = "10.0.0.2:53";

pub fn name(text: &str) -> DomainName {
    DomainName::parse(text).unwrap()
}

pub fn record(text: &str) -> DnsRecord {
    parse_record(text).unwrap()
}

pub fn records(lines: &[&str]) -> Vec<DnsRecord> {
    lines.iter().map(|l| record(l)).collect()
}

pub fn query(qname: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name(qname), record_type)
}

pub fn example_zone_config() -> ZoneConfig {
    ZoneConfig {
        name: "example.org".to_string(),
        upstream: Some(UPSTREAM.to_string()),
        soa: Some(
            "example.org 60 IN SOA ns1.example.org hostmaster.example.org 1 7200 900 1209600 86400"
                .to_string(),
        ),
        ns: vec![
            "example.org 60 IN NS ns1.example.org".to_string(),
            "example.org 60 IN NS ns2.example.org".to_string(),
        ],
        nsa: vec![
            "ns1.example.org 60 IN A 192.168.0.1".to_string(),
            "ns2.example.org 60 IN AAAA 2001:db8::53".to_string(),
        ],
    }
}

pub fn example_zone() -> Zone {
    let config = example_zone_config();
    Zone::new(
        name(&config.name),
        UPSTREAM.parse().unwrap(),
        record(config.soa.as_deref().unwrap()),
        config.ns.iter().map(|s| record(s)).collect(),
        config.nsa.iter().map(|s| record(s)).collect(),
    )
    .unwrap()
}

pub fn example_table() -> Arc<ZoneTable> {
    Arc::new(ZoneTable::new([example_zone()]).unwrap())
}
