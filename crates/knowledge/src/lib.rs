//! Keyword-scored lookup over a fixed set of TypeScript documentation excerpts

pub mod entries;
pub mod matcher;

pub use matcher::{BonusRule, BonusTrigger, DocsMatcher, KnowledgeBase};
pub use matcher::{FALLBACK_ANSWER, FALLBACK_SOURCE, SIGNAL_BONUS};
