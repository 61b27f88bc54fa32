use super::record_type_map::{DnsClassMapper, RecordTypeMapper};
use ferrous_dig_domain::{DomainError, Question, ResourceRecord, ResponseMessage};
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::Record;
use tracing::debug;

/// Turns reply bytes into a [`ResponseMessage`], keeping every section in
/// wire order and every rdata in presentation form.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ResponseMessage, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let response = ResponseMessage {
            id: message.id(),
            authoritative: message.authoritative(),
            truncated: message.truncated(),
            rcode: u16::from(message.response_code()),
            questions: message.queries().iter().map(Self::question).collect(),
            answers: Self::records(message.answers()),
            authority: Self::records(message.name_servers()),
            additional: Self::records(message.additionals()),
            wire_size: response_bytes.len(),
        };

        debug!(
            id = response.id,
            rcode = response.status(),
            answers = response.answers.len(),
            authority = response.authority.len(),
            additional = response.additional.len(),
            authoritative = response.authoritative,
            truncated = response.truncated,
            "DNS response parsed"
        );

        Ok(response)
    }

    fn question(query: &Query) -> Question {
        Question::new(
            query.name().to_utf8(),
            RecordTypeMapper::from_hickory(query.query_type()),
            DnsClassMapper::from_hickory(query.query_class()),
        )
    }

    fn records(records: &[Record]) -> Vec<ResourceRecord> {
        records
            .iter()
            .map(|record| {
                ResourceRecord::new(
                    record.name().to_utf8(),
                    RecordTypeMapper::from_hickory(record.record_type()),
                    DnsClassMapper::from_hickory(record.dns_class()),
                    record.ttl(),
                    record.data().to_string(),
                )
            })
            .collect()
    }
}
