//! Sends one query to one server: UDP first, TCP when the UDP reply comes
//! back truncated.

pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_dig_application::ports::DnsTransport;
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

/// DNS header flag byte 2: QR(1) + Opcode(4) + AA(1) + TC(1) + RD(1)
const TC_FLAG: u8 = 0x02;

#[derive(Debug, Default, Clone, Copy)]
pub struct NetworkTransport;

impl NetworkTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for NetworkTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let started = Instant::now();
        let reply = UdpTransport::new(server).send(message_bytes, timeout).await?;

        if !is_truncated(&reply) {
            return Ok(reply);
        }

        let remaining = timeout.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            return Err(DomainError::TransportTimeout {
                server: server.to_string(),
            });
        }

        debug!(server = %server, "Truncated UDP response, retrying over TCP");
        TcpTransport::new(server).send(message_bytes, remaining).await
    }
}

pub(crate) fn message_id(bytes: &[u8]) -> Option<u16> {
    (bytes.len() >= 2).then(|| u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn is_truncated(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[2] & TC_FLAG != 0
}

/// Rejects a reply whose ID does not match the query's.
pub(crate) fn check_reply_id(
    server: SocketAddr,
    query: &[u8],
    reply: &[u8],
) -> Result<(), DomainError> {
    if reply.len() < 12 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Reply from {} is shorter than a DNS header ({} bytes)",
            server,
            reply.len()
        )));
    }
    if message_id(query) != message_id(reply) {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Reply from {} does not match the query ID",
            server
        )));
    }
    Ok(())
}
