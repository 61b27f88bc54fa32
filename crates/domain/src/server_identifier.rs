use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::DomainError;

/// A nameserver as named by a referral or the root list: either a literal
/// address or a hostname that still needs an address lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerIdentifier {
    Address(IpAddr),
    Hostname(Arc<str>),
}

impl ServerIdentifier {
    /// Interprets presentation-form text. IP literals (optionally in
    /// brackets) become addresses; anything else is a hostname with the
    /// trailing root label removed.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let unbracketed = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);

        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Some(ServerIdentifier::Address(ip));
        }

        let host = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if host.is_empty() || host.contains(char::is_whitespace) {
            return None;
        }
        Some(ServerIdentifier::Hostname(Arc::from(host)))
    }

    pub fn hostname(&self) -> Option<&str> {
        match self {
            ServerIdentifier::Address(_) => None,
            ServerIdentifier::Hostname(host) => Some(&**host),
        }
    }
}

impl FromStr for ServerIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            DomainError::InvalidDomainName(format!("'{}' is not a server name or address", s))
        })
    }
}

impl fmt::Display for ServerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerIdentifier::Address(ip) => write!(f, "{}", ip),
            ServerIdentifier::Hostname(host) => write!(f, "{}", host),
        }
    }
}
