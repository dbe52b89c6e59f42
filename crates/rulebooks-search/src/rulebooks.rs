//! Search filter for rulebook records

use rulebooks_domain::RulebookRecord;

use crate::searcher::{FuzzySearcher, Searchable};

/// Fields searched on every rulebook, in scoring order
pub const RULEBOOK_SEARCH_KEYS: [&str; 5] = ["id", "user", "rules", "description", "source"];

impl Searchable for RulebookRecord {
    fn field_text(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "user" => Some(&self.user),
            "description" => Some(&self.description),
            "source" => Some(&self.source),
            // Structured list, not matched
            "rules" => None,
            _ => None,
        }
    }
}

/// Rulebooks visible for `query` with the default strict options
///
/// A blank query returns every record in its original order.
pub fn filter_rulebooks(records: &[RulebookRecord], query: &str) -> Vec<RulebookRecord> {
    FuzzySearcher::default().filter(records, query)
}
