use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;
use crate::ServerIdentifier;

/// IPv4 addresses of a.root-servers.net through m.root-servers.net, in order.
pub const DEFAULT_ROOT_SERVERS: [&str; 13] = [
    "198.41.0.4",
    "199.9.14.201",
    "192.33.4.12",
    "199.7.91.13",
    "192.203.230.10",
    "192.5.5.241",
    "192.112.36.4",
    "198.97.190.53",
    "192.36.148.17",
    "192.58.128.30",
    "193.0.14.129",
    "199.7.83.42",
    "202.12.27.33",
];

/// Root, TLD, authoritative.
pub const FIXED_DELEGATION_LEVELS: usize = 3;

/// How far the engine follows referrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationDepth {
    /// Query exactly this many levels, whatever the last one returns.
    Fixed(usize),

    /// Keep following referrals until a level answers, is authoritative, or
    /// stops referring, but never more than `max_hops` levels.
    Adaptive { max_hops: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    #[default]
    Adaptive,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailoverMode {
    /// One candidate at a time, in list order.
    #[default]
    Sequential,
    /// All candidates at once; the first usable reply wins.
    Race,
}

/// Record type used when re-resolving the target of a CNAME.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChaseQueryType {
    #[default]
    A,
    Original,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default)]
    pub depth: DepthMode,

    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    #[serde(default)]
    pub failover: FailoverMode,

    /// Use A/AAAA glue from the additional section instead of looking up
    /// nameserver hostnames.
    #[serde(default)]
    pub use_glue: bool,

    #[serde(default)]
    pub cname_chase_type: ChaseQueryType,

    /// Reject query types outside A, MX, NS, CNAME instead of warning.
    #[serde(default)]
    pub strict_input: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            depth: DepthMode::default(),
            max_hops: default_max_hops(),
            failover: FailoverMode::default(),
            use_glue: false,
            cname_chase_type: ChaseQueryType::default(),
            strict_input: false,
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn delegation_depth(&self) -> DelegationDepth {
        match self.depth {
            DepthMode::Fixed => DelegationDepth::Fixed(FIXED_DELEGATION_LEVELS),
            DepthMode::Adaptive => DelegationDepth::Adaptive {
                max_hops: self.max_hops,
            },
        }
    }

    /// Parses the configured root list, failing on the first entry that is
    /// neither an address nor a hostname.
    pub fn root_server_identifiers(&self) -> Result<Vec<ServerIdentifier>, ConfigError> {
        self.root_servers
            .iter()
            .map(|entry| {
                entry.parse::<ServerIdentifier>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid root server: {}", e))
                })
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }
        self.root_server_identifiers()?;

        if self.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }
        if self.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_root_servers() -> Vec<String> {
    DEFAULT_ROOT_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_hops() -> usize {
    16
}
