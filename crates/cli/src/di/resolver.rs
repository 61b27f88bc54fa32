use ferrous_dig_application::services::{
    CnameChaser, IterativeResolver, ReferralExtractor, ServerListWalker, WalkerOptions,
};
use ferrous_dig_application::use_cases::ResolveQueryUseCase;
use ferrous_dig_domain::{Config, ConfigError, ServerIdentifier};
use ferrous_dig_infrastructure::dns::{
    HickoryMessageCodec, NetworkTransport, SystemAddressResolver,
};
use std::sync::Arc;
use tracing::debug;

pub struct ResolverServices {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub root_servers: Vec<ServerIdentifier>,
}

impl ResolverServices {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let resolver_config = &config.resolver;
        let root_servers = resolver_config.root_server_identifiers()?;

        let walker = Arc::new(ServerListWalker::new(
            Arc::new(NetworkTransport::new()),
            Arc::new(HickoryMessageCodec::new()),
            Arc::new(SystemAddressResolver::new(resolver_config.query_timeout())),
            WalkerOptions::from(resolver_config),
        ));
        let resolver = Arc::new(IterativeResolver::new(
            walker,
            ReferralExtractor::with_glue(resolver_config.use_glue),
            resolver_config.delegation_depth(),
        ));
        let chaser = Arc::new(CnameChaser::new(resolver, resolver_config.cname_chase_type));

        debug!(
            roots = root_servers.len(),
            depth = ?resolver_config.delegation_depth(),
            failover = ?resolver_config.failover,
            glue = resolver_config.use_glue,
            "Resolver wired"
        );

        Ok(Self {
            resolve_query: Arc::new(ResolveQueryUseCase::new(chaser)),
            root_servers,
        })
    }
}
