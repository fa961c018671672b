use super::{DnsRecord, DomainName, RecordType, ZoneError};
use std::net::SocketAddr;

/// Statically configured zone. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: DomainName,
    upstream: SocketAddr,
    soa: DnsRecord,
    ns: Vec<DnsRecord>,
    glue: Vec<DnsRecord>,
}

impl Zone {
    /// Validates the zone invariants: one SOA and a non-empty NS set, all owned
    /// by the apex, plus a non-empty set of address (glue) records.
    pub fn new(
        name: DomainName,
        upstream: SocketAddr,
        soa: DnsRecord,
        ns: Vec<DnsRecord>,
        glue: Vec<DnsRecord>,
    ) -> Result<Self, ZoneError> {
        let zone = name.to_string();

        if soa.record_type() != RecordType::SOA {
            return Err(ZoneError::UnexpectedRecordType {
                zone,
                expected: "SOA",
                actual: soa.record_type().to_string(),
            });
        }
        if soa.name() != &name {
            return Err(ZoneError::OwnerMismatch {
                zone,
                kind: "SOA",
                owner: soa.name().to_string(),
            });
        }

        if ns.is_empty() {
            return Err(ZoneError::MissingNs { zone });
        }
        for record in &ns {
            if record.record_type() != RecordType::NS {
                return Err(ZoneError::UnexpectedRecordType {
                    zone,
                    expected: "NS",
                    actual: record.record_type().to_string(),
                });
            }
            if record.name() != &name {
                return Err(ZoneError::OwnerMismatch {
                    zone,
                    kind: "NS",
                    owner: record.name().to_string(),
                });
            }
        }

        if glue.is_empty() {
            return Err(ZoneError::MissingGlue { zone });
        }
        if let Some(record) = glue.iter().find(|r| !r.is_address()) {
            return Err(ZoneError::UnexpectedRecordType {
                zone,
                expected: "A/AAAA",
                actual: record.record_type().to_string(),
            });
        }

        Ok(Self {
            name,
            upstream,
            soa,
            ns,
            glue,
        })
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    pub fn soa(&self) -> &DnsRecord {
        &self.soa
    }

    pub fn ns_records(&self) -> &[DnsRecord] {
        &self.ns
    }

    pub fn glue_records(&self) -> &[DnsRecord] {
        &self.glue
    }

    pub fn is_apex(&self, name: &DomainName) -> bool {
        self.soa.name() == name
    }

    /// First glue record of `record_type` owned by `name`.
    pub fn glue_for(&self, name: &DomainName, record_type: RecordType) -> Option<&DnsRecord> {
        self.glue
            .iter()
            .find(|r| r.name() == name && r.record_type() == record_type)
    }

    /// True when `name` is the apex, an NS owner or a glue owner, i.e. a
    /// name the zone itself proves to exist.
    pub fn is_known_name(&self, name: &DomainName) -> bool {
        self.is_apex(name)
            || self.ns.iter().any(|r| r.name() == name)
            || self.glue.iter().any(|r| r.name() == name)
    }

    /// Glue owners that no NS record of the zone points at.
    pub fn orphan_glue(&self) -> impl Iterator<Item = &DomainName> {
        self.glue.iter().map(DnsRecord::name).filter(move |owner| {
            !self
                .ns
                .iter()
                .any(|ns| ns.ns_target() == Some(*owner))
        })
    }
}
