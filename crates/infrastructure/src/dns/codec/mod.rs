pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::{DnsClassMapper, RecordTypeMapper};
pub use response_parser::ResponseParser;

use ferrous_dig_application::ports::MessageCodec;
use ferrous_dig_domain::{DomainError, Question, ResponseMessage};

/// DNS wire format backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryMessageCodec;

impl HickoryMessageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryMessageCodec {
    fn encode_query(&self, question: &Question) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(question).map(|(_, bytes)| bytes)
    }

    fn decode_response(&self, bytes: &[u8]) -> Result<ResponseMessage, DomainError> {
        ResponseParser::parse(bytes)
    }
}
