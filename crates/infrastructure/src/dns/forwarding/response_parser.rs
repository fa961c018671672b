use crate::dns::record_map::RecordMapper;
use apexdns_application::ports::UpstreamAnswer;
use apexdns_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply into the rcode and answer section.
    ///
    /// Answers of record types outside the supported set are dropped.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<UpstreamAnswer, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "upstream sent a query instead of a response".to_string(),
            ));
        }
        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        let rcode = RecordMapper::from_hickory_rcode(message.response_code());

        let mut answers = Vec::with_capacity(message.answers().len());
        for record in message.answers() {
            match RecordMapper::from_hickory_record(record)? {
                Some(record) => answers.push(record),
                None => debug!(
                    name = %record.name(),
                    record_type = %record.record_type(),
                    "Dropping unsupported upstream record"
                ),
            }
        }

        debug!(
            rcode = %rcode,
            answers = answers.len(),
            truncated = message.truncated(),
            "Upstream response parsed"
        );

        Ok(UpstreamAnswer::new(rcode, answers))
    }
}
