pub mod tcp;
pub mod udp;

use apexdns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

pub use tcp::{read_with_length_prefix, send_with_length_prefix, TcpTransport};
pub use udp::UdpTransport;

/// Write and read deadlines of a single exchange, applied independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeTimeouts {
    pub write: Duration,
    pub read: Duration,
}

impl ExchangeTimeouts {
    pub fn from_millis(write_ms: u64, read_ms: u64) -> Self {
        Self {
            write: Duration::from_millis(write_ms),
            read: Duration::from_millis(read_ms),
        }
    }
}

impl Default for ExchangeTimeouts {
    fn default() -> Self {
        Self::from_millis(1000, 1000)
    }
}

pub enum Transport {
    Udp(UdpTransport),
    Tcp(TcpTransport),
}

impl Transport {
    pub async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        match self {
            Self::Udp(t) => t.exchange(message_bytes).await,
            Self::Tcp(t) => t.exchange(message_bytes).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub(crate) fn map_io_error(server: SocketAddr, error: io::Error) -> DomainError {
    let server = server.to_string();
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset { server }
        }
        io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
        _ => DomainError::IoError(format!("{}: {}", server, error)),
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
