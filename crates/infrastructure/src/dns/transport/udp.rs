//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Datagrams whose ID does not match
//! the query are dropped and the socket keeps listening until the timeout.

use super::check_reply_id;
use ferrous_dig_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Large enough for any reply a server will send without EDNS(0).
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: format!("Failed to bind UDP socket: {}", e),
        })?;

        tokio::time::timeout(timeout, self.exchange(&socket, message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
    }

    async fn exchange(&self, socket: &UdpSocket, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| DomainError::Transport {
                server: self.server_addr.to_string(),
                reason: format!("Failed to send UDP query: {}", e),
            })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) =
                socket
                    .recv_from(&mut recv_buf)
                    .await
                    .map_err(|e| DomainError::Transport {
                        server: self.server_addr.to_string(),
                        reason: format!("Failed to receive UDP response: {}", e),
                    })?;

            if from_addr.ip() != self.server_addr.ip() {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            let reply = &recv_buf[..bytes_received];
            if let Err(e) = check_reply_id(self.server_addr, message_bytes, reply) {
                warn!(server = %self.server_addr, error = %e, "Discarding UDP datagram");
                continue;
            }

            debug!(server = %self.server_addr, bytes_received, "UDP response received");
            return Ok(reply.to_vec());
        }
    }
}
