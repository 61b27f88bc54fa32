use ferrous_dig_domain::{DomainError, Question, ResponseMessage};

/// Wire format on both sides of the transport.
pub trait MessageCodec: Send + Sync {
    /// Encodes a non-recursive query for `question`.
    fn encode_query(&self, question: &Question) -> Result<Vec<u8>, DomainError>;

    /// Decodes a reply. `wire_size` of the result is the length of `bytes`.
    fn decode_response(&self, bytes: &[u8]) -> Result<ResponseMessage, DomainError>;
}
