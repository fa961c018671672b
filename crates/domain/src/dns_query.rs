use super::{DomainName, RecordType};

/// A single question as received from a client, name already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: DomainName,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: DomainName, record_type: RecordType) -> Self {
        Self { name, record_type }
    }
}
