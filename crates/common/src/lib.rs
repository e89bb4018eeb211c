use serde::{Deserialize, Serialize};

// Knowledge base types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub keywords: Vec<String>,
    pub answer: String,
    pub source: String,
}

impl KnowledgeEntry {
    pub fn new(id: &str, keywords: &[&str], answer: &str, source: &str) -> Self {
        Self {
            id: id.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_string(),
            source: source.to_string(),
        }
    }
}

// Outcome of matching a query against the knowledge base. A fallback
// result carries no entry_id and scores zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub answer: String,
    pub source: String,
    pub score: u32,
    pub entry_id: Option<String>,
}

impl MatchResult {
    pub fn is_fallback(&self) -> bool {
        self.entry_id.is_none()
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum TechDocsError {
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, TechDocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_entry_creation() {
        let entry = KnowledgeEntry::new(
            "fat_arrow",
            &["fat arrow", "arrow", "syntax"],
            "The => syntax is called fat arrow.",
            "TypeScript Book",
        );

        assert_eq!(entry.id, "fat_arrow");
        assert_eq!(entry.keywords.len(), 3);
        assert_eq!(entry.keywords[0], "fat arrow");
        assert_eq!(entry.source, "TypeScript Book");
    }

    #[test]
    fn test_match_result_fallback_detection() {
        let matched = MatchResult {
            answer: "answer".to_string(),
            source: "source".to_string(),
            score: 14,
            entry_id: Some("fat_arrow".to_string()),
        };
        assert!(!matched.is_fallback());

        let fallback = MatchResult {
            answer: "answer".to_string(),
            source: "source".to_string(),
            score: 0,
            entry_id: None,
        };
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TechDocsError::EmptyQuery.to_string(),
            "Query must not be empty"
        );
        assert_eq!(
            TechDocsError::Configuration("bad PORT".to_string()).to_string(),
            "Configuration error: bad PORT"
        );
    }

    #[test]
    fn test_knowledge_entry_serialization() {
        let entry = KnowledgeEntry::new("id", &["kw"], "a", "s");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], "id");
        assert_eq!(value["keywords"][0], "kw");
        assert_eq!(value["answer"], "a");
        assert_eq!(value["source"], "s");
    }
}
