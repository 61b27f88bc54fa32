pub mod cname_chaser;
pub mod iterative_resolver;
pub mod referral_extractor;
pub mod server_walker;

pub use cname_chaser::{ChaseOutcome, CnameChaser};
pub use iterative_resolver::IterativeResolver;
pub use referral_extractor::ReferralExtractor;
pub use server_walker::{ServerListWalker, WalkerOptions};
