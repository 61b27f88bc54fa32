use super::{DnsClass, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A resource record as received from a server. The rdata is kept in
/// presentation form; nothing downstream needs the structured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub class: DnsClass,

    pub ttl: u32,

    pub data: Arc<str>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: RecordType,
        class: DnsClass,
        ttl: u32,
        data: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            data: data.into(),
        }
    }

    pub fn is_cname(&self) -> bool {
        self.record_type == RecordType::CNAME
    }

    /// The rdata with any trailing root label stripped, e.g. the alias
    /// target of a CNAME or the server name of an NS record.
    pub fn data_as_name(&self) -> &str {
        let data = self.data.trim();
        data.strip_suffix('.').filter(|d| !d.is_empty()).unwrap_or(data)
    }

    /// Compares owner names the way DNS does: ASCII case-insensitive,
    /// ignoring the trailing root label.
    pub fn owned_by(&self, name: &str) -> bool {
        let own = self.name.trim_end_matches('.');
        own.eq_ignore_ascii_case(name.trim_end_matches('.'))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}
