//! Generic fuzzy searcher over items with named text fields

use std::cmp::Ordering;

use tracing::debug;

use crate::bitap::Bitap;
use crate::error::Result;
use crate::options::SearchOptions;

/// Bitap match score (0.0 = perfect, 1.0 = worst accepted)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MatchScore(f64);

impl MatchScore {
    pub const PERFECT: MatchScore = MatchScore(0.0);

    pub fn new(score: f64) -> Self {
        Self(score.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Order by relevance, best match first
    pub fn relevance_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Fuzzy match result
#[derive(Debug, Clone)]
pub struct FuzzyMatch<T> {
    pub item: T,
    pub score: MatchScore,
    /// Keys whose field text matched, in key order
    pub matched_keys: Vec<String>,
}

/// An item whose fields can be fuzzy searched
pub trait Searchable {
    /// Text of the named field
    ///
    /// Returns `None` when the field is missing or not plain text; such
    /// fields never match.
    fn field_text(&self, key: &str) -> Option<&str>;
}

/// Scores items against a query across the configured keys
#[derive(Debug, Clone, Default)]
pub struct FuzzySearcher {
    options: SearchOptions,
}

impl FuzzySearcher {
    pub fn new(options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find the items matching `query`
    ///
    /// An empty or whitespace-only query returns every item in input order
    /// with a perfect score. Otherwise only matching items are returned,
    /// ordered by score when sorting is enabled; equal scores keep input
    /// order.
    pub fn search<'a, T: Searchable>(&self, items: &'a [T], query: &str) -> Vec<FuzzyMatch<&'a T>> {
        if query.trim().is_empty() {
            return items
                .iter()
                .map(|item| FuzzyMatch {
                    item,
                    score: MatchScore::PERFECT,
                    matched_keys: Vec::new(),
                })
                .collect();
        }

        let bitap = Bitap::new(query, &self.options);
        let mut matches: Vec<FuzzyMatch<&'a T>> = items
            .iter()
            .filter_map(|item| self.score_item(&bitap, item))
            .collect();

        if self.options.should_sort {
            matches.sort_by(|a, b| a.score.relevance_cmp(&b.score));
        }

        debug!(
            pattern_len = bitap.pattern_len(),
            matched = matches.len(),
            total = items.len(),
            "Fuzzy search completed"
        );
        matches
    }

    /// Matching items as a new owned list
    pub fn filter<T: Searchable + Clone>(&self, items: &[T], query: &str) -> Vec<T> {
        self.search(items, query)
            .into_iter()
            .map(|m| m.item.clone())
            .collect()
    }

    /// Mean score over the matching keys, or `None` if no key matched
    fn score_item<'a, T: Searchable>(&self, bitap: &Bitap, item: &'a T) -> Option<FuzzyMatch<&'a T>> {
        let mut total = 0.0;
        let mut matched_keys = Vec::new();

        for key in &self.options.keys {
            let Some(text) = item.field_text(key) else {
                continue;
            };
            if let Some(score) = bitap.search(text) {
                total += score.value();
                matched_keys.push(key.clone());
            }
        }

        if matched_keys.is_empty() {
            return None;
        }

        Some(FuzzyMatch {
            item,
            score: MatchScore::new(total / matched_keys.len() as f64),
            matched_keys,
        })
    }
}
