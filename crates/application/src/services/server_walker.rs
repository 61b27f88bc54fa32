use crate::ports::{DnsTransport, MessageCodec, ServerAddressResolver};
use ferrous_dig_domain::{
    DomainError, FailoverMode, Question, ResolverConfig, ResponseMessage, ServerIdentifier,
};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct WalkerOptions {
    pub port: u16,
    pub timeout: Duration,
    pub mode: FailoverMode,
}

impl Default for WalkerOptions {
    fn default() -> Self {
        Self {
            port: 53,
            timeout: Duration::from_secs(5),
            mode: FailoverMode::Sequential,
        }
    }
}

impl From<&ResolverConfig> for WalkerOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            port: config.port,
            timeout: config.query_timeout(),
            mode: config.failover,
        }
    }
}

/// Picks one reply for one level of the hierarchy.
///
/// Candidates are tried in list order and the first usable reply wins. A
/// candidate whose address cannot be found, that times out, fails at the
/// transport, or sends back something undecodable is skipped. When nothing
/// answers the result is the empty sentinel, never an error.
pub struct ServerListWalker {
    transport: Arc<dyn DnsTransport>,
    codec: Arc<dyn MessageCodec>,
    addresses: Arc<dyn ServerAddressResolver>,
    options: WalkerOptions,
}

impl ServerListWalker {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        codec: Arc<dyn MessageCodec>,
        addresses: Arc<dyn ServerAddressResolver>,
        options: WalkerOptions,
    ) -> Self {
        Self {
            transport,
            codec,
            addresses,
            options,
        }
    }

    pub async fn query(&self, servers: &[ServerIdentifier], question: &Question) -> ResponseMessage {
        if servers.is_empty() {
            debug!(name = %question.name, "No candidate servers at this level");
            return ResponseMessage::empty();
        }

        let query_bytes = match self.codec.encode_query(question) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(name = %question.name, error = %e, "Could not encode query");
                return ResponseMessage::empty();
            }
        };

        match self.options.mode {
            FailoverMode::Sequential => {
                self.query_sequential(servers, &query_bytes, question).await
            }
            FailoverMode::Race => self.query_race(servers, &query_bytes, question).await,
        }
    }

    async fn query_sequential(
        &self,
        servers: &[ServerIdentifier],
        query_bytes: &[u8],
        question: &Question,
    ) -> ResponseMessage {
        debug!(strategy = "sequential", servers = servers.len(), name = %question.name, "Trying sequentially");

        for (position, server) in servers.iter().enumerate() {
            match self.attempt(server, query_bytes).await {
                Ok(reply) => {
                    debug!(server = %server, position, bytes = reply.wire_size, "Server responded");
                    return reply;
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position, "Failing over");
                }
            }
        }

        debug!(name = %question.name, servers = servers.len(), "Candidate list exhausted");
        ResponseMessage::empty()
    }

    async fn query_race(
        &self,
        servers: &[ServerIdentifier],
        query_bytes: &[u8],
        question: &Question,
    ) -> ResponseMessage {
        debug!(strategy = "race", servers = servers.len(), name = %question.name, "Racing all candidates");

        let mut attempts: FuturesUnordered<_> = servers
            .iter()
            .enumerate()
            .map(|(position, server)| async move {
                (position, server, self.attempt(server, query_bytes).await)
            })
            .collect();

        // dropping `attempts` on return cancels the losers
        while let Some((position, server, outcome)) = attempts.next().await {
            match outcome {
                Ok(reply) => {
                    debug!(server = %server, position, bytes = reply.wire_size, "Fastest response");
                    return reply;
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position, "Candidate failed");
                }
            }
        }

        debug!(name = %question.name, servers = servers.len(), "Candidate list exhausted");
        ResponseMessage::empty()
    }

    async fn attempt(
        &self,
        server: &ServerIdentifier,
        query_bytes: &[u8],
    ) -> Result<ResponseMessage, DomainError> {
        let ip = self.server_address(server).await?;
        let addr = SocketAddr::new(ip, self.options.port);

        let reply_bytes = tokio::time::timeout(
            self.options.timeout,
            self.transport.send(addr, query_bytes, self.options.timeout),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: addr.to_string(),
        })??;

        let reply = self.codec.decode_response(&reply_bytes)?;
        if reply.is_empty() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "empty reply from {}",
                addr
            )));
        }
        Ok(reply)
    }

    async fn server_address(&self, server: &ServerIdentifier) -> Result<IpAddr, DomainError> {
        match server {
            ServerIdentifier::Address(ip) => Ok(*ip),
            ServerIdentifier::Hostname(host) => {
                tokio::time::timeout(self.options.timeout, self.addresses.lookup(host))
                    .await
                    .map_err(|_| DomainError::AddressResolution {
                        server: host.to_string(),
                        reason: "lookup timed out".to_string(),
                    })?
            }
        }
    }
}
