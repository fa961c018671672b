//! Builds the recursion-desired query sent to a zone's upstream resolver.

use crate::dns::record_map::RecordMapper;
use apexdns_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::DNSClass;
use hickory_proto::serialize::binary::BinEncodable;

/// UDP payload size advertised to upstream resolvers and to clients.
pub const EDNS_PAYLOAD_SIZE: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialized query plus the id to match the reply against.
    ///
    /// The message carries a random id, the RD flag, one IN-class question
    /// and an EDNS0 OPT record advertising [`EDNS_PAYLOAD_SIZE`].
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let name = RecordMapper::to_hickory_name(&query.name)?;

        let mut question = Query::query(name, RecordMapper::to_hickory_type(query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(question);

        let mut edns = Edns::new();
        edns.set_max_payload(EDNS_PAYLOAD_SIZE);
        edns.set_version(0);
        message.set_edns(edns);

        let bytes = message.to_bytes().map_err(|e| {
            DomainError::IoError(format!("Failed to serialize DNS query: {}", e))
        })?;

        Ok((id, bytes))
    }
}
