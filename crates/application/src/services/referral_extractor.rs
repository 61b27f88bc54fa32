use ferrous_dig_domain::{ResponseMessage, ServerIdentifier};
use std::net::IpAddr;
use tracing::debug;

/// Reads the next level's nameservers out of a referral.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferralExtractor {
    use_glue: bool,
}

impl ReferralExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// With glue enabled, a nameserver hostname that has an address record
    /// in the additional section is returned as that address.
    pub fn with_glue(use_glue: bool) -> Self {
        Self { use_glue }
    }

    /// Authority records reinterpreted as server identifiers, in section
    /// order with duplicates kept. An empty result means there is no further
    /// level to query.
    pub fn extract_servers(&self, message: &ResponseMessage) -> Vec<ServerIdentifier> {
        message
            .authority
            .iter()
            .filter_map(|record| {
                let server = ServerIdentifier::parse(&record.data);
                if server.is_none() {
                    debug!(
                        owner = %record.name,
                        record_type = %record.record_type,
                        "Authority record does not name a server, skipping"
                    );
                }
                server
            })
            .map(|server| {
                if !self.use_glue {
                    return server;
                }
                let glue = server
                    .hostname()
                    .and_then(|host| Self::glue_for(host, message));
                glue.map(ServerIdentifier::Address).unwrap_or(server)
            })
            .collect()
    }

    fn glue_for(hostname: &str, message: &ResponseMessage) -> Option<IpAddr> {
        message
            .additional
            .iter()
            .filter(|record| record.record_type.is_address() && record.owned_by(hostname))
            .find_map(|record| record.data.trim().parse::<IpAddr>().ok())
    }
}
