//! Upstream resolver discovery through an instance metadata service.
//!
//! The first network interface's VPC CIDR is looked up and the resolver is
//! taken to live at the network address plus two, port 53.

use apexdns_application::ports::UpstreamDiscovery;
use apexdns_domain::DomainError;
use async_trait::async_trait;
use ipnetwork::Ipv4Network;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, info};

const RESOLVER_OFFSET: u32 = 2;
const DNS_PORT: u16 = 53;

pub struct MetadataUpstreamDiscovery {
    base_url: String,
    http_client: reqwest::Client,
}

impl MetadataUpstreamDiscovery {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("apexdns/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::DiscoveryFailed(e.to_string()))?;

        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            base_url,
            http_client,
        })
    }

    async fn fetch(&self, path: &str) -> Result<String, DomainError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::DiscoveryFailed(format!("fetch error for {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::DiscoveryFailed(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::DiscoveryFailed(format!("read error for {}: {}", url, e)))?;

        debug!(url = %url, len = body.len(), "Metadata fetched");
        Ok(body)
    }
}

#[async_trait]
impl UpstreamDiscovery for MetadataUpstreamDiscovery {
    async fn discover(&self) -> Result<SocketAddr, DomainError> {
        let macs = self.fetch("network/interfaces/macs/").await?;
        let interface = macs
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| DomainError::DiscoveryFailed("no network interfaces listed".to_string()))?;
        let interface = interface.trim_end_matches('/');

        let cidr = self
            .fetch(&format!(
                "network/interfaces/macs/{}/vpc-ipv4-cidr-block/",
                interface
            ))
            .await?;

        let upstream = upstream_from_cidr(&cidr)?;
        info!(interface = %interface, cidr = %cidr.trim(), upstream = %upstream, "Upstream derived from VPC CIDR");
        Ok(upstream)
    }
}

/// Network address of `cidr` plus two, port 53.
pub fn upstream_from_cidr(cidr: &str) -> Result<SocketAddr, DomainError> {
    let network: Ipv4Network = cidr
        .trim()
        .parse()
        .map_err(|e| DomainError::DiscoveryFailed(format!("invalid CIDR '{}': {}", cidr.trim(), e)))?;

    let base = u32::from(network.network());
    let resolver = base
        .checked_add(RESOLVER_OFFSET)
        .map(Ipv4Addr::from)
        .filter(|addr| network.contains(*addr))
        .ok_or_else(|| {
            DomainError::DiscoveryFailed(format!("CIDR '{}' has no room for a resolver", network))
        })?;

    Ok(SocketAddr::new(resolver.into(), DNS_PORT))
}
