use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{ChaseQueryType, DepthMode, FailoverMode, ResolverConfig};

const LOCAL_CONFIG_PATH: &str = "ferrous-dig.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-dig/config.toml";

/// Main configuration structure for Ferrous Dig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Root servers, timeouts and walk policy
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dig.toml in current directory
    /// 3. /etc/ferrous-dig/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(max_hops) = overrides.max_hops {
            self.resolver.max_hops = max_hops;
        }
        if overrides.fixed_depth {
            self.resolver.depth = DepthMode::Fixed;
        }
        if overrides.race {
            self.resolver.failover = FailoverMode::Race;
        }
        if overrides.use_glue {
            self.resolver.use_glue = true;
        }
        if overrides.chase_original_type {
            self.resolver.cname_chase_type = ChaseQueryType::Original;
        }
        if overrides.strict_input {
            self.resolver.strict_input = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.validate()
    }
}

/// Command-line overrides for configuration. Flags only ever switch a
/// behaviour on; leaving them unset keeps the file's value.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout_ms: Option<u64>,
    pub max_hops: Option<usize>,
    pub fixed_depth: bool,
    pub race: bool,
    pub use_glue: bool,
    pub chase_original_type: bool,
    pub strict_input: bool,
    pub log_level: Option<String>,
}
