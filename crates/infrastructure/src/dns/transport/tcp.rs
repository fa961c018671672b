use super::{map_io_error, timeout_error, ExchangeTimeouts};
use apexdns_domain::DomainError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// One query per connection, 2-byte length framing (RFC 1035 §4.2.2).
pub struct TcpTransport {
    server_addr: SocketAddr,
    timeouts: ExchangeTimeouts,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr, timeouts: ExchangeTimeouts) -> Self {
        Self {
            server_addr,
            timeouts,
        }
    }

    pub async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.server_addr;

        let mut stream = tokio::time::timeout(self.timeouts.write, TcpStream::connect(server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| map_io_error(server, e))?;
        stream
            .set_nodelay(true)
            .map_err(|e| map_io_error(server, e))?;

        tokio::time::timeout(
            self.timeouts.write,
            send_with_length_prefix(&mut stream, message_bytes),
        )
        .await
        .map_err(|_| timeout_error(server))??;

        debug!(server = %server, message_len = message_bytes.len(), "TCP query sent");

        let response = tokio::time::timeout(self.timeouts.read, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| timeout_error(server))??;

        debug!(server = %server, response_len = response.len(), "TCP response received");
        Ok(response)
    }
}

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::IoError(format!(
            "message of {} bytes exceeds TCP frame limit",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read message length: {}", e)))?;

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream
        .read_exact(&mut message)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read message body: {}", e)))?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        send_with_length_prefix(&mut client, b"\x12\x34hello").await.unwrap();
        let received = read_with_length_prefix(&mut server).await.unwrap();

        assert_eq!(received, b"\x12\x34hello");
    }

    #[tokio::test]
    async fn test_short_frame_is_an_error() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(&[0x00, 0x10, 0x01]).await.unwrap();
        drop(client);

        assert!(read_with_length_prefix(&mut server).await.is_err());
    }
}
