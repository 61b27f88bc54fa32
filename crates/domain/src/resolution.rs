use super::{Question, ResourceRecord, ResponseMessage, ServerIdentifier};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;

/// One level of the delegation walk: the servers that were offered and the
/// reply selected from them (the empty sentinel when none answered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationHop {
    /// 0 for the root level.
    pub level: usize,

    pub servers: Vec<ServerIdentifier>,

    pub response: ResponseMessage,
}

/// Outcome of one end-user query.
#[derive(Debug, Clone)]
pub struct ResolutionResult {
    /// The question the user asked.
    pub question: Question,

    /// Question section echoed by the final reply. Empty when nothing answered.
    pub question_section: Vec<Question>,

    pub answers: Vec<ResourceRecord>,

    pub elapsed: Duration,

    pub completed_at: DateTime<Local>,

    /// Wire size of the final reply in bytes; zero when no server answered.
    pub message_size: usize,

    /// Canonical name that was chased when the first answer was a CNAME.
    pub alias_target: Option<Arc<str>>,

    /// Levels walked for the user's question, root first.
    pub trace: Vec<DelegationHop>,
}

impl ResolutionResult {
    pub fn query_time_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn followed_alias(&self) -> bool {
        self.alias_target.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.message_size == 0
    }
}
