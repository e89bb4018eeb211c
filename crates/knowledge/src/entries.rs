use techdocs_rag_common::KnowledgeEntry;

/// Excerpts from the TypeScript Book that the matcher can answer from.
/// Declaration order is fixed and doubles as the tie-break order.
pub fn typescript_book() -> Vec<KnowledgeEntry> {
    vec![
        // Fat arrow syntax
        KnowledgeEntry::new(
            "fat_arrow",
            &["affectionately call", "fat arrow", "author", "arrow", "syntax"],
            "The author affectionately calls the => syntax 'fat arrow'",
            "TypeScript Book - https://github.com/basarat/typescript-book",
        ),
        // Double-bang boolean conversion
        KnowledgeEntry::new(
            "boolean_operator",
            &["explicit boolean", "converts any value", "boolean", "operator"],
            "The !! operator converts any value into an explicit boolean",
            "TypeScript Book - https://github.com/basarat/typescript-book",
        ),
        // Lambda functions
        KnowledgeEntry::new(
            "lambda_function",
            &["lambda function", "lambda", "function expression", "shortcut syntax"],
            "For defining function expressions, TypeScript provides a shortcut syntax. A lambda function is an unnamed anonymous function. Here, '=>' is a lambda operator.",
            "TypeScript Book - https://github.com/basarat/typescript-book",
        ),
        // Compiler API node traversal
        KnowledgeEntry::new(
            "walk_child_nodes",
            &["getChildren", "child node", "every child", "walk", "child", "ts.Node"],
            "node.getChildren() lets you walk every child node of a ts.Node",
            "TypeScript Book - Compiler API",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_are_well_formed() {
        let entries = typescript_book();
        assert_eq!(entries.len(), 4);

        for entry in &entries {
            assert!(!entry.keywords.is_empty(), "entry '{}' has no keywords", entry.id);
            assert!(!entry.answer.is_empty());
            assert!(!entry.source.is_empty());
        }

        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }
}
