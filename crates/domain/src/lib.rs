//! apexdns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod domain_name;
pub mod errors;
pub mod zone;
pub mod zone_table;

pub use config::Config;
pub use dns_query::DnsQuery;
pub use dns_record::{parse_record, DnsRecord, RecordData, RecordType, SoaData};
pub use dns_response::{ResponseCode, ZoneResponse};
pub use domain_name::DomainName;
pub use errors::{DomainError, ZoneError};
pub use zone::Zone;
pub use zone_table::ZoneTable;
