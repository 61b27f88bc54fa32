use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::IpAddr;

/// Finds an address for a nameserver known only by hostname.
#[async_trait]
pub trait ServerAddressResolver: Send + Sync {
    async fn lookup(&self, hostname: &str) -> Result<IpAddr, DomainError>;
}
