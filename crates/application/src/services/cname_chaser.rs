use super::IterativeResolver;
use ferrous_dig_domain::{
    ChaseQueryType, DelegationHop, Question, RecordType, ResponseMessage, ServerIdentifier,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ChaseOutcome {
    pub message: ResponseMessage,
    /// Canonical name that was re-resolved, if the first answer was a CNAME.
    pub alias_target: Option<Arc<str>>,
    /// Levels walked for the user's own question by the walk whose reply
    /// became `message`. The canonical name's walk is not traced.
    pub hops: Vec<DelegationHop>,
}

/// Follows a CNAME found as the first answer and merges the canonical answer
/// into the reply.
pub struct CnameChaser {
    resolver: Arc<IterativeResolver>,
    chase_type: ChaseQueryType,
}

impl CnameChaser {
    pub fn new(resolver: Arc<IterativeResolver>, chase_type: ChaseQueryType) -> Self {
        Self {
            resolver,
            chase_type,
        }
    }

    pub async fn resolve_with_alias_following(
        &self,
        question: &Question,
        root_servers: &[ServerIdentifier],
    ) -> ChaseOutcome {
        let (message, hops) = self.resolver.resolve_traced(question, root_servers).await;

        let Some(target) = message
            .first_answer()
            .filter(|record| record.is_cname())
            .map(|record| Arc::<str>::from(record.data_as_name()))
        else {
            return ChaseOutcome {
                message,
                alias_target: None,
                hops,
            };
        };

        let canonical = Question::new(
            target.clone(),
            self.canonical_type(question),
            question.class,
        );
        debug!(
            alias = %question.name,
            canonical = %canonical.name,
            record_type = %canonical.record_type,
            "Following CNAME"
        );

        // Both names are walked again from the roots, independently.
        let (rewalked, rewalked_hops) = self.resolver.resolve_traced(question, root_servers).await;
        let canonical_reply = self.resolver.resolve(&canonical, root_servers).await;

        // The sentinel must stay record-free, so a failed re-walk falls back
        // to the reply that carried the alias.
        let (mut merged, hops) = if rewalked.is_empty() {
            debug!(alias = %question.name, "Re-walk got no reply, keeping the first walk");
            (message, hops)
        } else {
            (rewalked, rewalked_hops)
        };

        match canonical_reply.first_answer() {
            Some(record) => merged.append_answer(record.clone()),
            None => debug!(canonical = %canonical.name, "Canonical name has no answer"),
        }

        ChaseOutcome {
            message: merged,
            alias_target: Some(target),
            hops,
        }
    }

    fn canonical_type(&self, question: &Question) -> RecordType {
        match self.chase_type {
            ChaseQueryType::A => RecordType::A,
            ChaseQueryType::Original => question.record_type,
        }
    }
}
