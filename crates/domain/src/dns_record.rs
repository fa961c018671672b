pub mod record;
pub mod record_type;
pub mod text;

pub use record::{DnsRecord, RecordData, SoaData};
pub use record_type::RecordType;
pub use text::parse_record;
