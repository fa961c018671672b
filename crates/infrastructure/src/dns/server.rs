use super::next_handler::NextHandler;
use super::record_map::RecordMapper;
use super::response_assembler::{ResponseAssembler, ServerTransport};
use apexdns_application::use_cases::{QueryOutcome, ResolveZoneQueryUseCase};
use apexdns_domain::{DnsQuery, DomainError, ResponseCode};
use hickory_proto::op::{Message, MessageType, OpCode};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Entry point for raw DNS messages from the UDP and TCP listeners.
pub struct DnsServerHandler {
    use_case: Arc<ResolveZoneQueryUseCase>,
    next: Arc<dyn NextHandler>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveZoneQueryUseCase>, next: Arc<dyn NextHandler>) -> Self {
        Self { use_case, next }
    }

    /// Returns the encoded reply, or `None` when the input is dropped silently.
    pub async fn handle_raw(&self, bytes: &[u8], transport: ServerTransport) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, len = bytes.len(), "Unparseable DNS message");
                return ResponseAssembler::format_error_from_header(bytes);
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(id = request.id(), "Dropping DNS response received on server socket");
            return None;
        }

        let reply = self.handle_request(bytes, &request, transport).await;
        match reply {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(id = request.id(), error = %e, "Failed to encode reply");
                ResponseAssembler::error(&request, ResponseCode::SERV_FAIL, transport).ok()
            }
        }
    }

    async fn handle_request(
        &self,
        raw: &[u8],
        request: &Message,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        if request.op_code() != OpCode::Query {
            debug!(op_code = ?request.op_code(), "Unsupported opcode");
            return ResponseAssembler::error(request, ResponseCode::NOT_IMP, transport);
        }

        let [question] = request.queries() else {
            debug!(questions = request.queries().len(), "Expected exactly one question");
            return ResponseAssembler::error(request, ResponseCode::FORM_ERR, transport);
        };

        if let Some(edns) = request.extensions() {
            if edns.version() > 0 {
                debug!(version = edns.version(), "Unsupported EDNS version");
                return ResponseAssembler::bad_version(request, transport);
            }
        }

        let name = match RecordMapper::from_hickory_name(question.name()) {
            Ok(name) => name,
            Err(e) => {
                debug!(error = %e, "Invalid query name");
                return ResponseAssembler::error(request, ResponseCode::FORM_ERR, transport);
            }
        };
        let query = DnsQuery::new(name, RecordMapper::from_hickory_type(question.query_type()));

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            transport = transport.as_str(),
            "DNS query received"
        );

        match self.use_case.execute(&query).await {
            Ok(QueryOutcome::Answered(response)) => {
                debug!(
                    name = %query.name,
                    rcode = %response.rcode,
                    answers = response.answers.len(),
                    "Zone answer"
                );
                ResponseAssembler::answer(request, &response, transport)
            }
            Ok(QueryOutcome::NotInZone) => {
                debug!(name = %query.name, next = self.next.name(), "Passing query to next handler");
                self.next.handle(raw, request, transport).await
            }
            Err(e) => {
                warn!(name = %query.name, error = %e, "Query resolution failed");
                ResponseAssembler::error(request, ResponseCode::SERV_FAIL, transport)
            }
        }
    }
}
