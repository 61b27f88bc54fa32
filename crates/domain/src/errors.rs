use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid query type: {0}")]
    InvalidRecordType(String),

    #[error("Could not resolve address of server {server}: {reason}")]
    AddressResolution { server: String, reason: String },

    #[error("Transport timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("Transport error querying {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncoding(String),
}
