//! Search options

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Longest pattern the Bitap bit masks can hold
pub const MAX_PATTERN_LENGTH: usize = 32;

/// Largest accepted `location` and `distance`, in characters
pub const MAX_OFFSET: usize = 1_000_000;

/// Tuning for the fuzzy searcher
///
/// The defaults give strict, case-sensitive matching anchored at the start
/// of each field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchOptions {
    /// Compare pattern and text without case folding
    pub case_sensitive: bool,
    /// Highest score still accepted as a match (0.0 = exact only)
    pub threshold: f64,
    /// Position in each field where the pattern is expected
    pub location: usize,
    /// How far from `location` a match may drift before it scores 1.0
    pub distance: usize,
    /// Query characters past this length are ignored
    pub max_pattern_length: usize,
    /// Fields searched on every item
    pub keys: Vec<String>,
    /// Order matches by score; otherwise keep input order
    pub should_sort: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            threshold: 0.0,
            location: 0,
            distance: 100,
            max_pattern_length: MAX_PATTERN_LENGTH,
            keys: crate::rulebooks::RULEBOOK_SEARCH_KEYS
                .iter()
                .map(|key| key.to_string())
                .collect(),
            should_sort: true,
        }
    }
}

impl SearchOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sorting(mut self, should_sort: bool) -> Self {
        self.should_sort = should_sort;
        self
    }

    /// Check that the options can drive a Bitap search
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold(self.threshold));
        }
        if self.max_pattern_length == 0 || self.max_pattern_length > MAX_PATTERN_LENGTH {
            return Err(SearchError::InvalidPatternLength(self.max_pattern_length));
        }
        if self.location > MAX_OFFSET {
            return Err(SearchError::InvalidLocation(self.location));
        }
        if self.distance > MAX_OFFSET {
            return Err(SearchError::InvalidDistance(self.distance));
        }
        if self.keys.is_empty() {
            return Err(SearchError::NoKeys);
        }
        if let Some(position) = self.keys.iter().position(|key| key.trim().is_empty()) {
            return Err(SearchError::EmptyKey(position));
        }
        Ok(())
    }
}
