use apexdns_domain::DomainError;
use async_trait::async_trait;
use std::net::SocketAddr;

/// Source of an upstream resolver address for zones configured without one.
#[async_trait]
pub trait UpstreamDiscovery: Send + Sync {
    async fn discover(&self) -> Result<SocketAddr, DomainError>;
}
