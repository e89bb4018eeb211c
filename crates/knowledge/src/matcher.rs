use techdocs_rag_common::{KnowledgeEntry, MatchResult};
use tracing::{debug, info};

/// Answer returned when no entry scores above zero.
pub const FALLBACK_ANSWER: &str =
    "No relevant information found in the TypeScript documentation.";

/// Source citation accompanying the fallback answer.
pub const FALLBACK_SOURCE: &str = "TypeScript Book - https://github.com/basarat/typescript-book";

/// Fixed score increment applied when a bonus rule fires.
pub const SIGNAL_BONUS: u32 = 10;

/// Trigger half of a bonus rule, evaluated against both forms of the query.
#[derive(Debug, Clone)]
pub enum BonusTrigger {
    /// Punctuation token checked against the raw query. Case-folding is a
    /// no-op for symbols, so the normalized form would work too, but the
    /// raw text is the authoritative place to look for them.
    Symbol(&'static str),
    /// Two words that must both appear in the normalized query, in
    /// either order and at any distance.
    WordPair(&'static str, &'static str),
}

/// Associates a trigger with the entry keyword it boosts.
#[derive(Debug, Clone)]
pub struct BonusRule {
    pub trigger: BonusTrigger,
    pub keyword: &'static str,
    pub bonus: u32,
}

impl BonusRule {
    fn fires(&self, raw: &str, normalized: &str) -> bool {
        match &self.trigger {
            BonusTrigger::Symbol(token) => raw.contains(token),
            BonusTrigger::WordPair(a, b) => normalized.contains(a) && normalized.contains(b),
        }
    }

    /// A rule only boosts entries whose keyword set contains the phrase
    /// the bonus is tied to.
    fn applies_to(&self, entry: &KnowledgeEntry) -> bool {
        entry
            .keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(self.keyword))
    }
}

/// Read-only collection of knowledge entries with a fixed iteration order.
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        debug_assert!(
            entries.iter().all(|e| !e.keywords.is_empty()),
            "every knowledge entry needs at least one keyword"
        );
        Self { entries }
    }

    /// The built-in TypeScript Book excerpt set.
    pub fn typescript_book() -> Self {
        Self::new(crate::entries::typescript_book())
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scores every knowledge entry against a query and returns the best one,
/// falling back to a canned response when nothing matches.
pub struct DocsMatcher {
    knowledge: KnowledgeBase,
    bonus_rules: Vec<BonusRule>,
}

impl DocsMatcher {
    pub fn new() -> Self {
        Self::with_knowledge_base(KnowledgeBase::typescript_book())
    }

    pub fn with_knowledge_base(knowledge: KnowledgeBase) -> Self {
        let matcher = Self {
            knowledge,
            bonus_rules: default_bonus_rules(),
        };

        info!(
            "Initialized docs matcher with {} entries and {} bonus rules",
            matcher.knowledge.len(),
            matcher.bonus_rules.len()
        );
        matcher
    }

    /// Pure scoring pass over the knowledge base. Safe to call
    /// concurrently, nothing is mutated.
    pub fn answer(&self, query: &str) -> MatchResult {
        let normalized = query.to_lowercase();
        debug!("Matching query: '{}'", query);

        // Strictly-greater comparison keeps the first entry on ties and
        // never selects a zero score.
        let mut best: Option<(&KnowledgeEntry, u32)> = None;
        for entry in self.knowledge.entries() {
            let score = self.score_entry(entry, query, &normalized);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((entry, score));
            }
        }

        match best {
            Some((entry, score)) => {
                debug!("Best match: '{}' with score {}", entry.id, score);
                MatchResult {
                    answer: entry.answer.clone(),
                    source: entry.source.clone(),
                    score,
                    entry_id: Some(entry.id.clone()),
                }
            }
            None => {
                debug!("No entry scored above zero, returning fallback");
                MatchResult {
                    answer: FALLBACK_ANSWER.to_string(),
                    source: FALLBACK_SOURCE.to_string(),
                    score: 0,
                    entry_id: None,
                }
            }
        }
    }

    fn score_entry(&self, entry: &KnowledgeEntry, raw: &str, normalized: &str) -> u32 {
        let mut score = 0;

        // Multi-word phrases contribute one point per word, rewarding
        // specific matches over generic ones.
        for keyword in &entry.keywords {
            if normalized.contains(&keyword.to_lowercase()) {
                score += keyword.split_whitespace().count() as u32;
            }
        }

        for rule in &self.bonus_rules {
            if rule.applies_to(entry) && rule.fires(raw, normalized) {
                score += rule.bonus;
            }
        }

        score
    }
}

impl Default for DocsMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn default_bonus_rules() -> Vec<BonusRule> {
    vec![
        // Fat arrow syntax questions
        BonusRule {
            trigger: BonusTrigger::Symbol("=>"),
            keyword: "arrow",
            bonus: SIGNAL_BONUS,
        },
        // Double-bang boolean conversion questions
        BonusRule {
            trigger: BonusTrigger::Symbol("!!"),
            keyword: "boolean",
            bonus: SIGNAL_BONUS,
        },
        // Compiler API node traversal questions
        BonusRule {
            trigger: BonusTrigger::WordPair("walk", "child"),
            keyword: "walk",
            bonus: SIGNAL_BONUS,
        },
    ]
}
