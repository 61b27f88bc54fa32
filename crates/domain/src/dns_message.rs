use super::{Question, ResourceRecord};
use serde::{Deserialize, Serialize};

/// A decoded reply.
///
/// `ResponseMessage::empty()` is the sentinel for "no usable reply from this
/// level": it has a wire size of zero. A well-formed reply whose answer
/// section happens to be empty is not the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub id: u16,

    pub authoritative: bool,

    pub truncated: bool,

    pub rcode: u16,

    pub questions: Vec<Question>,

    pub answers: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,

    /// Number of bytes the reply occupied on the wire.
    pub wire_size: usize,
}

impl ResponseMessage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.wire_size == 0
    }

    pub fn first_answer(&self) -> Option<&ResourceRecord> {
        self.answers.first()
    }

    pub fn append_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// True when this reply is a referral: no answers, nameservers listed in
    /// the authority section, and not flagged authoritative.
    pub fn is_referral(&self) -> bool {
        !self.is_empty() && !self.authoritative && self.answers.is_empty() && !self.authority.is_empty()
    }

    pub fn status(&self) -> &'static str {
        match self.rcode {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
