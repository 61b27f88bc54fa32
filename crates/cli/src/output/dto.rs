use ferrous_dig_domain::{DelegationHop, Question, ResolutionResult, ResourceRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub class: String,
}

impl QuestionResponse {
    pub fn from_question(q: &Question) -> Self {
        Self {
            name: q.name.to_string(),
            record_type: q.record_type.to_string(),
            class: q.class.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
}

impl RecordResponse {
    pub fn from_record(r: &ResourceRecord) -> Self {
        Self {
            name: r.name.to_string(),
            ttl: r.ttl,
            class: r.class.to_string(),
            record_type: r.record_type.to_string(),
            data: r.data.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HopResponse {
    pub level: usize,
    pub servers: Vec<String>,
    /// `None` when no offered server answered.
    pub status: Option<&'static str>,
    pub authoritative: bool,
    pub answers: Vec<RecordResponse>,
    pub authority: Vec<RecordResponse>,
    pub bytes: usize,
}

impl HopResponse {
    pub fn from_hop(hop: &DelegationHop) -> Self {
        let reply = &hop.response;
        Self {
            level: hop.level,
            servers: hop.servers.iter().map(|s| s.to_string()).collect(),
            status: (!reply.is_empty()).then(|| reply.status()),
            authoritative: reply.authoritative,
            answers: reply.answers.iter().map(RecordResponse::from_record).collect(),
            authority: reply.authority.iter().map(RecordResponse::from_record).collect(),
            bytes: reply.wire_size,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResponse {
    pub question: QuestionResponse,
    pub question_section: Vec<QuestionResponse>,
    pub answers: Vec<RecordResponse>,
    pub query_time_ms: u64,
    pub when: String,
    pub msg_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<HopResponse>,
}

impl ResolutionResponse {
    pub fn from_result(result: &ResolutionResult, with_trace: bool) -> Self {
        Self {
            question: QuestionResponse::from_question(&result.question),
            question_section: result
                .question_section
                .iter()
                .map(QuestionResponse::from_question)
                .collect(),
            answers: result.answers.iter().map(RecordResponse::from_record).collect(),
            query_time_ms: result.query_time_ms() as u64,
            when: result.completed_at.to_rfc3339(),
            msg_size: result.message_size,
            alias_target: result.alias_target.as_ref().map(|t| t.to_string()),
            trace: if with_trace {
                result.trace.iter().map(HopResponse::from_hop).collect()
            } else {
                Vec::new()
            },
        }
    }
}
