use crate::services::CnameChaser;
use chrono::Local;
use ferrous_dig_domain::{Question, ResolutionResult, ServerIdentifier};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub struct ResolveQueryUseCase {
    chaser: Arc<CnameChaser>,
}

impl ResolveQueryUseCase {
    pub fn new(chaser: Arc<CnameChaser>) -> Self {
        Self { chaser }
    }

    /// Resolves one end-user question. Never fails: when no server answers,
    /// the result is empty with a message size of zero.
    pub async fn execute(
        &self,
        question: &Question,
        root_servers: &[ServerIdentifier],
    ) -> ResolutionResult {
        let start = Instant::now();
        let outcome = self
            .chaser
            .resolve_with_alias_following(question, root_servers)
            .await;
        let elapsed = start.elapsed();
        let completed_at = Local::now();

        info!(
            name = %question.name,
            record_type = %question.record_type,
            answers = outcome.message.answers.len(),
            bytes = outcome.message.wire_size,
            alias = outcome.alias_target.as_deref().unwrap_or("-"),
            elapsed_ms = elapsed.as_millis() as u64,
            "Query resolved"
        );

        let message = outcome.message;
        ResolutionResult {
            question: question.clone(),
            question_section: message.questions,
            answers: message.answers,
            elapsed,
            completed_at,
            message_size: message.wire_size,
            alias_target: outcome.alias_target,
            trace: outcome.hops,
        }
    }
}
