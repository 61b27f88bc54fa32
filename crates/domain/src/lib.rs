//! Ferrous Dig Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;
pub mod server_identifier;

pub use config::{
    ChaseQueryType, CliOverrides, Config, ConfigError, DelegationDepth, DepthMode, FailoverMode,
    LoggingConfig, ResolverConfig, DEFAULT_ROOT_SERVERS, FIXED_DELEGATION_LEVELS,
};
pub use dns_message::ResponseMessage;
pub use dns_query::Question;
pub use dns_record::{DnsClass, RecordType, ResourceRecord, USER_QUERYABLE};
pub use errors::DomainError;
pub use resolution::{DelegationHop, ResolutionResult};
pub use server_identifier::ServerIdentifier;
