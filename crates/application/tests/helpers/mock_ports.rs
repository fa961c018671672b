#![allow(dead_code)]

use apexdns_application::ports::{UpstreamAnswer, UpstreamDiscovery, UpstreamForwarder};
use apexdns_domain::{DnsQuery, DomainError, ResponseCode};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Forwarder returning canned answers keyed by query name. Unknown names get
/// an empty NOERROR answer.
#[derive(Clone)]
pub struct MockUpstreamForwarder {
    answers: Arc<RwLock<HashMap<String, UpstreamAnswer>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<RwLock<Vec<(SocketAddr, DnsQuery)>>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
            error: Arc::new(RwLock::new(None)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_answer(&self, qname: &str, answer: UpstreamAnswer) {
        self.answers
            .write()
            .await
            .insert(qname.to_string(), answer);
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.error.write().await = Some(error);
    }

    pub async fn calls(&self) -> Vec<(SocketAddr, DnsQuery)> {
        self.calls.read().await.clone()
    }
}

impl Default for MockUpstreamForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(
        &self,
        upstream: SocketAddr,
        query: &DnsQuery,
    ) -> Result<UpstreamAnswer, DomainError> {
        self.calls.write().await.push((upstream, query.clone()));

        if let Some(error) = self.error.read().await.clone() {
            return Err(error);
        }

        Ok(self
            .answers
            .read()
            .await
            .get(query.name.as_str())
            .cloned()
            .unwrap_or_else(|| UpstreamAnswer::new(ResponseCode::NO_ERROR, vec![])))
    }
}

pub struct MockUpstreamDiscovery {
    result: Result<SocketAddr, DomainError>,
    calls: AtomicUsize,
}

impl MockUpstreamDiscovery {
    pub fn returning(addr: &str) -> Self {
        Self {
            result: Ok(addr.parse().unwrap()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(DomainError::DiscoveryFailed("metadata unavailable".to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl UpstreamDiscovery for MockUpstreamDiscovery {
    async fn discover(&self) -> Result<SocketAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}
