//! Final shaping of every reply: header flags, EDNS handling and the size
//! budget of the transport the request arrived on.

use super::forwarding::message_builder::EDNS_PAYLOAD_SIZE;
use super::record_map::RecordMapper;
use super::transport::tcp::MAX_TCP_MESSAGE_SIZE;
use apexdns_domain::{DomainError, ResponseCode, ZoneResponse};
use hickory_proto::op::{Edns, Message, MessageType, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncodable;
use tracing::debug;

/// Classic DNS limit for UDP replies to clients without EDNS.
pub const MIN_UDP_PAYLOAD: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTransport {
    Udp,
    Tcp,
}

impl ServerTransport {
    /// Largest reply this request may receive.
    pub fn budget(&self, request: &Message) -> usize {
        match self {
            ServerTransport::Tcp => MAX_TCP_MESSAGE_SIZE,
            ServerTransport::Udp => match request.extensions() {
                Some(edns) => (edns.max_payload() as usize)
                    .clamp(MIN_UDP_PAYLOAD, EDNS_PAYLOAD_SIZE as usize),
                None => MIN_UDP_PAYLOAD,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerTransport::Udp => "udp",
            ServerTransport::Tcp => "tcp",
        }
    }
}

pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Authoritative reply carrying the sections of a zone answer.
    pub fn answer(
        request: &Message,
        response: &ZoneResponse,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        let mut message = Self::reply_header(request, response.rcode);
        message.set_authoritative(true);
        message.add_answers(RecordMapper::to_hickory_records(&response.answers)?);
        message.add_name_servers(RecordMapper::to_hickory_records(&response.authority)?);
        message.add_additionals(RecordMapper::to_hickory_records(&response.additional)?);

        Self::encode_within(message, transport.budget(request))
    }

    /// Record-less reply (FORMERR, NOTIMP, SERVFAIL) echoing id and question.
    pub fn error(
        request: &Message,
        rcode: ResponseCode,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        let message = Self::reply_header(request, rcode);
        Self::encode_within(message, transport.budget(request))
    }

    /// BADVERS reply for a request using an EDNS version above 0.
    pub fn bad_version(
        request: &Message,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        Self::encode_within(Self::bad_version_message(request), transport.budget(request))
    }

    pub fn bad_version_message(request: &Message) -> Message {
        let mut message = Self::reply_header(request, ResponseCode::NO_ERROR);
        message.set_response_code(HickoryResponseCode::BADVERS);
        message
    }

    /// FORMERR for a datagram that did not parse but has a readable header.
    pub fn format_error_from_header(bytes: &[u8]) -> Option<Vec<u8>> {
        if bytes.len() < 12 || bytes[2] & 0x80 != 0 {
            return None;
        }

        let mut message = Message::new();
        message
            .set_id(u16::from_be_bytes([bytes[0], bytes[1]]))
            .set_message_type(MessageType::Response)
            .set_recursion_desired(bytes[2] & 0x01 != 0)
            .set_recursion_available(true)
            .set_response_code(HickoryResponseCode::FormErr);

        message.to_bytes().ok()
    }

    /// Applies the transport budget to a reply relayed from another resolver.
    pub fn fit_relayed(
        request: &Message,
        reply_bytes: Vec<u8>,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        let budget = transport.budget(request);
        if reply_bytes.len() <= budget {
            return Ok(reply_bytes);
        }

        let reply = Message::from_vec(&reply_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse relayed reply: {}", e))
        })?;
        Self::encode_within(reply, budget)
    }

    fn reply_header(request: &Message, rcode: ResponseCode) -> Message {
        let mut message = Message::new();
        message
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(RecordMapper::to_hickory_rcode(rcode));
        message.add_queries(request.queries().to_vec());

        if request.extensions().is_some() {
            let mut edns = Edns::new();
            edns.set_max_payload(EDNS_PAYLOAD_SIZE);
            edns.set_version(0);
            message.set_edns(edns);
        }

        message
    }

    /// Encodes `message`, dropping trailing records until it fits `budget`.
    ///
    /// Additional records go first, then authority, then answers. TC is set
    /// once an authority or answer record has been dropped.
    fn encode_within(mut message: Message, budget: usize) -> Result<Vec<u8>, DomainError> {
        let bytes = Self::encode(&message)?;
        if bytes.len() <= budget {
            return Ok(bytes);
        }

        let mut answers = message.take_answers();
        let mut authority = message.take_name_servers();
        let mut additional = message.take_additionals();
        let mut truncated = message.truncated();

        loop {
            if additional.pop().is_none() {
                if authority.pop().is_some() || answers.pop().is_some() {
                    truncated = true;
                } else {
                    break;
                }
            }

            let candidate = Self::with_sections(&message, &answers, &authority, &additional, truncated);
            let bytes = Self::encode(&candidate)?;
            if bytes.len() <= budget {
                debug!(
                    budget,
                    size = bytes.len(),
                    answers = answers.len(),
                    authority = authority.len(),
                    additional = additional.len(),
                    truncated,
                    "Reply trimmed to fit"
                );
                return Ok(bytes);
            }
        }

        // Header, question and OPT alone exceed the budget.
        let candidate = Self::with_sections(&message, &[], &[], &[], true);
        Self::encode(&candidate)
    }

    fn with_sections(
        base: &Message,
        answers: &[Record],
        authority: &[Record],
        additional: &[Record],
        truncated: bool,
    ) -> Message {
        let mut message = base.clone();
        message.set_truncated(truncated);
        message.add_answers(answers.to_vec());
        message.add_name_servers(authority.to_vec());
        message.add_additionals(additional.to_vec());
        message
    }

    fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
        message
            .to_bytes()
            .map_err(|e| DomainError::IoError(format!("Failed to serialize DNS reply: {}", e)))
    }
}
