use async_trait::async_trait;
use ferrous_dig_application::ports::ServerAddressResolver;
use ferrous_dig_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Looks nameserver hostnames up through the operating system resolver.
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ServerAddressResolver for SystemAddressResolver {
    /// IPv4 is preferred when the host has both families.
    async fn lookup(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        let host = hostname.trim_end_matches('.');
        let target = format!("{}:0", host);

        let addrs: Vec<SocketAddr> =
            tokio::time::timeout(self.timeout, tokio::net::lookup_host(&target))
                .await
                .map_err(|_| DomainError::AddressResolution {
                    server: host.to_string(),
                    reason: "lookup timed out".to_string(),
                })?
                .map_err(|e| DomainError::AddressResolution {
                    server: host.to_string(),
                    reason: e.to_string(),
                })?
                .collect();

        let chosen = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .map(|addr| addr.ip())
            .ok_or_else(|| DomainError::AddressResolution {
                server: host.to_string(),
                reason: "no addresses found".to_string(),
            })?;

        debug!(hostname = %host, address = %chosen, candidates = addrs.len(), "Nameserver address resolved");
        Ok(chosen)
    }
}
