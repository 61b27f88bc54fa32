pub mod class;
pub mod record;
pub mod record_type;

pub use class::DnsClass;
pub use record::ResourceRecord;
pub use record_type::{RecordType, USER_QUERYABLE};
