use super::response_assembler::{ResponseAssembler, ServerTransport};
use super::transport::{ExchangeTimeouts, TcpTransport, Transport, UdpTransport};
use apexdns_domain::{DomainError, ResponseCode};
use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use tracing::{debug, warn};

/// Receives queries for names outside every configured zone.
#[async_trait]
pub trait NextHandler: Send + Sync {
    /// `raw` is the request exactly as received; the reply is wire-encoded.
    async fn handle(
        &self,
        raw: &[u8],
        request: &Message,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError>;

    fn name(&self) -> &'static str;
}

/// End of the chain: every query reaching it fails with SERVFAIL.
pub struct ServFailNextHandler;

#[async_trait]
impl NextHandler for ServFailNextHandler {
    async fn handle(
        &self,
        _raw: &[u8],
        request: &Message,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        ResponseAssembler::error(request, ResponseCode::SERV_FAIL, transport)
    }

    fn name(&self) -> &'static str {
        "servfail"
    }
}

/// Relays the unmodified request to a fallback resolver over the transport
/// the client used.
pub struct ForwardNextHandler {
    server: SocketAddr,
    timeouts: ExchangeTimeouts,
}

impl ForwardNextHandler {
    pub fn new(server: SocketAddr, timeouts: ExchangeTimeouts) -> Self {
        Self { server, timeouts }
    }
}

#[async_trait]
impl NextHandler for ForwardNextHandler {
    async fn handle(
        &self,
        raw: &[u8],
        request: &Message,
        transport: ServerTransport,
    ) -> Result<Vec<u8>, DomainError> {
        let upstream = match transport {
            ServerTransport::Udp => Transport::Udp(UdpTransport::new(self.server, self.timeouts)),
            ServerTransport::Tcp => Transport::Tcp(TcpTransport::new(self.server, self.timeouts)),
        };

        debug!(
            server = %self.server,
            protocol = upstream.protocol_name(),
            id = request.id(),
            "Relaying query to fallback resolver"
        );

        match upstream.exchange(raw).await {
            Ok(reply) => ResponseAssembler::fit_relayed(request, reply, transport),
            Err(e) => {
                warn!(server = %self.server, error = %e, "Fallback resolver failed");
                ResponseAssembler::error(request, ResponseCode::SERV_FAIL, transport)
            }
        }
    }

    fn name(&self) -> &'static str {
        "forward"
    }
}
