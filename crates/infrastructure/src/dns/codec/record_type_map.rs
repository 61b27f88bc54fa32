//! Mapping between the domain's record types and classes and their
//! `hickory_proto` counterparts.
//!
//! Both sides are total over the 16-bit code space, so record types go
//! through their numeric value. Classes the domain only knows by number have
//! no hickory counterpart and are rejected when encoding.

use ferrous_dig_domain::{DnsClass, DomainError, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

pub struct DnsClassMapper;

impl DnsClassMapper {
    pub fn to_hickory(class: DnsClass) -> Result<DNSClass, DomainError> {
        match class {
            DnsClass::IN => Ok(DNSClass::IN),
            DnsClass::CH => Ok(DNSClass::CH),
            DnsClass::HS => Ok(DNSClass::HS),
            DnsClass::NONE => Ok(DNSClass::NONE),
            DnsClass::ANY => Ok(DNSClass::ANY),
            DnsClass::Other(code) => Err(DomainError::MessageEncoding(format!(
                "Unsupported query class CLASS{}",
                code
            ))),
        }
    }

    pub fn from_hickory(class: DNSClass) -> DnsClass {
        match class {
            DNSClass::IN => DnsClass::IN,
            DNSClass::CH => DnsClass::CH,
            DNSClass::HS => DnsClass::HS,
            DNSClass::NONE => DnsClass::NONE,
            DNSClass::ANY => DnsClass::ANY,
            other => DnsClass::Other(u16::from(other)),
        }
    }
}
