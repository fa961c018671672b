use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{ExchangeTimeouts, UdpTransport};
use apexdns_application::ports::{UpstreamAnswer, UpstreamForwarder};
use apexdns_domain::{DnsQuery, DomainError};
use async_trait::async_trait;
use std::net::SocketAddr;
use tracing::debug;

/// Forwards zone queries to the zone's upstream over UDP, one attempt each.
pub struct UdpUpstreamForwarder {
    timeouts: ExchangeTimeouts,
}

impl UdpUpstreamForwarder {
    pub fn new(timeouts: ExchangeTimeouts) -> Self {
        Self { timeouts }
    }
}

#[async_trait]
impl UpstreamForwarder for UdpUpstreamForwarder {
    async fn forward(
        &self,
        upstream: SocketAddr,
        query: &DnsQuery,
    ) -> Result<UpstreamAnswer, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query(query)?;

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            upstream = %upstream,
            "Forwarding query upstream"
        );

        let transport = UdpTransport::new(upstream, self.timeouts);
        let response_bytes = transport.exchange(&request_bytes).await?;

        ResponseParser::parse(&response_bytes, id)
    }
}
