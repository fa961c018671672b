use apexdns_domain::{DnsQuery, DnsRecord, DomainError, ResponseCode};
use async_trait::async_trait;
use std::net::SocketAddr;

/// What the upstream resolver said about a forwarded query. Only the answer
/// section and the response code are adopted; the zone supplies its own
/// authority and additional sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamAnswer {
    pub rcode: ResponseCode,
    pub answers: Vec<DnsRecord>,
}

impl UpstreamAnswer {
    pub fn new(rcode: ResponseCode, answers: Vec<DnsRecord>) -> Self {
        Self { rcode, answers }
    }
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Single recursion-desired exchange with `upstream`. No retry.
    async fn forward(
        &self,
        upstream: SocketAddr,
        query: &DnsQuery,
    ) -> Result<UpstreamAnswer, DomainError>;
}
