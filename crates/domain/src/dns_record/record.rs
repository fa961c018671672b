use super::RecordType;
use crate::DomainName;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// Payload of the record kinds this server understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(DomainName),
    NS(DomainName),
    SOA(SoaData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    name: DomainName,
    ttl: u32,
    data: RecordData,
}

impl DnsRecord {
    pub fn new(name: DomainName, ttl: u32, data: RecordData) -> Self {
        Self { name, ttl, data }
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::SOA(_) => RecordType::SOA,
        }
    }

    pub fn cname_target(&self) -> Option<&DomainName> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }

    pub fn ns_target(&self) -> Option<&DomainName> {
        match &self.data {
            RecordData::NS(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self.data, RecordData::A(_) | RecordData::AAAA(_))
    }

    pub fn set_name(&mut self, name: DomainName) {
        self.name = name;
    }

    pub fn set_ttl(&mut self, ttl: u32) {
        self.ttl = ttl;
    }
}
