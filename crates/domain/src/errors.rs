use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Upstream discovery failed: {0}")]
    DiscoveryFailed(String),

    #[error(transparent)]
    Zone(#[from] ZoneError),
}

impl DomainError {
    /// True for failures of the upstream exchange itself (as opposed to bad input).
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::IoError(_)
        )
    }
}

/// Errors raised while building a zone from its configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("zone '{zone}': 'soa' property is required")]
    MissingSoa { zone: String },

    #[error("zone '{zone}': 'ns' property is required")]
    MissingNs { zone: String },

    #[error("zone '{zone}': 'nsa' property is required")]
    MissingGlue { zone: String },

    #[error("invalid record '{record}': {reason}")]
    InvalidRecord { record: String, reason: String },

    #[error("zone '{zone}': {kind} record owner '{owner}' must be the zone apex")]
    OwnerMismatch {
        zone: String,
        kind: &'static str,
        owner: String,
    },

    #[error("zone '{zone}': expected {expected} record, got {actual}")]
    UnexpectedRecordType {
        zone: String,
        expected: &'static str,
        actual: String,
    },

    #[error("zone '{zone}': invalid upstream address '{address}': {reason}")]
    InvalidUpstream {
        zone: String,
        address: String,
        reason: String,
    },

    #[error("zone '{0}' is configured more than once")]
    Duplicate(String),
}
