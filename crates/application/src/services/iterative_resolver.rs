use super::{ReferralExtractor, ServerListWalker};
use ferrous_dig_domain::{
    DelegationDepth, DelegationHop, Question, ResponseMessage, ServerIdentifier,
};
use std::sync::Arc;
use tracing::debug;

/// Walks the delegation hierarchy from the roots down, sending the same
/// question at every level.
///
/// A reply that neither answers nor is authoritative and names no further
/// servers leaves the next level without candidates, so the walk ends with
/// the empty sentinel rather than an error.
pub struct IterativeResolver {
    walker: Arc<ServerListWalker>,
    extractor: ReferralExtractor,
    depth: DelegationDepth,
}

impl IterativeResolver {
    pub fn new(
        walker: Arc<ServerListWalker>,
        extractor: ReferralExtractor,
        depth: DelegationDepth,
    ) -> Self {
        Self {
            walker,
            extractor,
            depth,
        }
    }

    pub async fn resolve(
        &self,
        question: &Question,
        root_servers: &[ServerIdentifier],
    ) -> ResponseMessage {
        self.resolve_traced(question, root_servers).await.0
    }

    /// Same as [`resolve`](Self::resolve) but also returns every level that
    /// was queried, root first.
    pub async fn resolve_traced(
        &self,
        question: &Question,
        root_servers: &[ServerIdentifier],
    ) -> (ResponseMessage, Vec<DelegationHop>) {
        let max_levels = match self.depth {
            DelegationDepth::Fixed(levels) => levels,
            DelegationDepth::Adaptive { max_hops } => max_hops,
        };

        let mut hops: Vec<DelegationHop> = Vec::with_capacity(max_levels.min(8));
        let mut servers = root_servers.to_vec();
        let mut reply = ResponseMessage::empty();

        for level in 0..max_levels {
            reply = self.walker.query(&servers, question).await;
            let next = self.extractor.extract_servers(&reply);

            debug!(
                name = %question.name,
                level,
                offered = servers.len(),
                status = reply.status(),
                answers = reply.answers.len(),
                referrals = next.len(),
                authoritative = reply.authoritative,
                "Delegation hop"
            );

            let done = match self.depth {
                DelegationDepth::Fixed(_) => false,
                DelegationDepth::Adaptive { .. } => {
                    reply.is_empty() || reply.has_answers() || reply.authoritative
                }
            };

            hops.push(DelegationHop {
                level,
                servers: std::mem::replace(&mut servers, next),
                response: reply.clone(),
            });

            if done {
                return (reply, hops);
            }
        }

        if matches!(self.depth, DelegationDepth::Adaptive { .. }) && !reply.is_empty() {
            debug!(name = %question.name, levels = max_levels, "Hop limit reached");
        }

        (reply, hops)
    }
}
