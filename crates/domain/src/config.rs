pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{
    ChaseQueryType, DelegationDepth, DepthMode, FailoverMode, ResolverConfig, DEFAULT_ROOT_SERVERS,
    FIXED_DELEGATION_LEVELS,
};
pub use root::{CliOverrides, Config};
