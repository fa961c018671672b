//! UDP exchange with a single upstream (RFC 1035 §4.2.1).
//!
//! One datagram out, one datagram back, no retry. The socket is connected so
//! ICMP port-unreachable surfaces as `TransportConnectionRefused`.

use super::{map_io_error, timeout_error, ExchangeTimeouts};
use apexdns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest datagram accepted back; matches the EDNS payload we advertise.
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
    timeouts: ExchangeTimeouts,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeouts: ExchangeTimeouts) -> Self {
        Self {
            server_addr,
            timeouts,
        }
    }

    pub async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.server_addr;
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| map_io_error(server, e))?;
        socket
            .connect(server)
            .await
            .map_err(|e| map_io_error(server, e))?;

        let bytes_sent = tokio::time::timeout(self.timeouts.write, socket.send(message_bytes))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| map_io_error(server, e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(self.timeouts.read, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| map_io_error(server, e))?;

        recv_buf.truncate(bytes_received);
        debug!(server = %server, bytes_received, "UDP response received");

        Ok(recv_buf)
    }
}
