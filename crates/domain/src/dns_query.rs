use super::{DnsClass, DomainError, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Maximum length of a domain name in presentation form (RFC 1035 §2.3.4).
const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// The (name, type, class) triple sent unchanged to every level of the
/// hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: DnsClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Internet-class question, the only class the command line builds.
    pub fn internet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, record_type, DnsClass::IN)
    }

    /// Validates and normalizes a user-supplied hostname.
    pub fn parse(name: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }

        let without_root = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if without_root.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is longer than {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        if !without_root.is_empty() {
            for label in without_root.split('.') {
                if label.is_empty() || label.len() > MAX_LABEL_LEN {
                    return Err(DomainError::InvalidDomainName(format!(
                        "'{}' contains an invalid label",
                        trimmed
                    )));
                }
            }
        }

        Ok(Self::internet(trimmed, record_type))
    }

    /// Same type and class, different name.
    pub fn with_name(&self, name: impl Into<Arc<str>>) -> Self {
        Self::new(name, self.record_type, self.class)
    }

    /// The name with a trailing root label, as it appears on the wire.
    pub fn fqdn(&self) -> String {
        if self.name.ends_with('.') {
            self.name.to_string()
        } else {
            format!("{}.", self.name)
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t\t{}\t{}", self.fqdn(), self.class, self.record_type)
    }
}
