//! DNS Message Builder
//!
//! Constructs iterative query messages in wire format using `hickory-proto`.

use super::record_type_map::{DnsClassMapper, RecordTypeMapper};
use ferrous_dig_domain::{DomainError, Question};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query for `question` and return its ID with the wire bytes.
    ///
    /// The RD bit is left clear: each server is asked only for what it knows
    /// itself, and referrals are followed by the caller.
    pub fn build_query(question: &Question) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&question.fqdn()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(question.record_type));
        query.set_query_class(DnsClassMapper::to_hickory(question.class)?);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::MessageEncoding(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
