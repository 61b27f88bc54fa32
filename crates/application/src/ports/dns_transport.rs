use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Sends one encoded query to one server and returns the encoded reply.
///
/// Implementations must give up once `timeout` has elapsed; the walker relies
/// on that to move past unresponsive servers.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;
}
