//! Bitap approximate string matching
//!
//! The matcher scans a text for the pattern while tolerating an increasing
//! number of errors (insertions, deletions, substitutions). Each candidate
//! is scored as
//!
//! ```text
//! errors / pattern_len + |match_location - expected_location| / distance
//! ```
//!
//! and only candidates at or below the threshold are accepted. With a
//! threshold of `0.0` and an expected location of `0` only an error-free
//! occurrence at the very start of the text matches.

use std::collections::HashMap;

use crate::options::{SearchOptions, MAX_PATTERN_LENGTH};
use crate::searcher::MatchScore;

/// A compiled Bitap pattern
#[derive(Debug, Clone)]
pub struct Bitap {
    pattern: Vec<char>,
    alphabet: HashMap<char, u64>,
    case_sensitive: bool,
    threshold: f64,
    location: usize,
    distance: usize,
}

impl Bitap {
    /// Compile `pattern`, truncated to `options.max_pattern_length` characters
    /// and never past [`MAX_PATTERN_LENGTH`]
    pub fn new(pattern: &str, options: &SearchOptions) -> Self {
        let max_len = options.max_pattern_length.min(MAX_PATTERN_LENGTH);
        let pattern: Vec<char> = fold_case(pattern, options.case_sensitive)
            .chars()
            .take(max_len)
            .collect();
        let alphabet = pattern_alphabet(&pattern);

        Self {
            pattern,
            alphabet,
            case_sensitive: options.case_sensitive,
            threshold: options.threshold,
            location: options.location,
            distance: options.distance,
        }
    }

    /// The pattern actually searched for, after truncation and case folding
    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Search `text`, returning the best score if it matches
    pub fn search(&self, text: &str) -> Option<MatchScore> {
        if self.pattern.is_empty() || text.is_empty() {
            return None;
        }

        let text: Vec<char> = fold_case(text, self.case_sensitive).chars().collect();
        if text == self.pattern {
            return Some(MatchScore::PERFECT);
        }

        let pattern_len = self.pattern.len();
        let text_len = text.len();
        let expected = self.location;
        let mut threshold = self.threshold;

        // Exact occurrences around the expected location tighten the threshold
        if let Some(found) = find_from(&text, &self.pattern, expected) {
            threshold = threshold.min(self.score(0, found));
            let until = expected.saturating_add(pattern_len);
            if let Some(found) = rfind_until(&text, &self.pattern, until) {
                threshold = threshold.min(self.score(0, found));
            }
        }

        let mask = 1u64 << (pattern_len - 1);
        let mut best: Option<f64> = None;
        let mut bin_max = pattern_len + text_len;
        let mut last_bits: Vec<u64> = Vec::new();

        for errors in 0..pattern_len {
            // Widest window around the expected location that can still
            // beat the threshold at this error level.
            let mut bin_min = 0;
            let mut bin_mid = bin_max;
            while bin_min < bin_mid {
                if self.score(errors, expected.saturating_add(bin_mid)) <= threshold {
                    bin_min = bin_mid;
                } else {
                    bin_max = bin_mid;
                }
                bin_mid = (bin_max - bin_min) / 2 + bin_min;
            }
            bin_max = bin_mid;

            let mut start = expected.saturating_add(1).saturating_sub(bin_mid).max(1);
            let finish = expected.saturating_add(bin_mid).min(text_len) + pattern_len;

            let previous = |index: usize| last_bits.get(index).copied().unwrap_or(0);
            let mut bits = vec![0u64; finish + 2];
            bits[finish + 1] = (1u64 << errors) - 1;

            let mut j = finish;
            while j >= start {
                let current = j - 1;
                let char_match = text
                    .get(current)
                    .and_then(|c| self.alphabet.get(c))
                    .copied()
                    .unwrap_or(0);

                bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
                if errors > 0 {
                    bits[j] |= ((previous(j + 1) | previous(j)) << 1) | 1 | previous(j + 1);
                }

                if bits[j] & mask != 0 {
                    let score = self.score(errors, current);
                    if score <= threshold {
                        threshold = score;
                        best = Some(score);
                        if current <= expected {
                            break;
                        }
                        start = expected.saturating_mul(2).saturating_sub(current).max(1);
                    }
                }
                j -= 1;
            }

            if self.score(errors + 1, expected) > threshold {
                break;
            }
            last_bits = bits;
        }

        best.map(MatchScore::new)
    }

    fn score(&self, errors: usize, location: usize) -> f64 {
        let accuracy = errors as f64 / self.pattern.len() as f64;
        let proximity = self.location.abs_diff(location);
        if self.distance == 0 {
            return if proximity == 0 { accuracy } else { 1.0 };
        }
        accuracy + proximity as f64 / self.distance as f64
    }
}

fn fold_case(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// Bit mask per pattern character; the first character owns the highest bit
fn pattern_alphabet(pattern: &[char]) -> HashMap<char, u64> {
    let len = pattern.len();
    let mut alphabet = HashMap::new();
    for (index, c) in pattern.iter().enumerate() {
        *alphabet.entry(*c).or_insert(0) |= 1u64 << (len - index - 1);
    }
    alphabet
}

/// First occurrence of `pattern` starting at or after `from`
fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    let last = text.len().checked_sub(pattern.len())?;
    (from..=last).find(|&i| text[i..i + pattern.len()] == *pattern)
}

/// Last occurrence of `pattern` starting at or before `until`
fn rfind_until(text: &[char], pattern: &[char], until: usize) -> Option<usize> {
    let last = text.len().checked_sub(pattern.len())?.min(until);
    (0..=last)
        .rev()
        .find(|&i| text[i..i + pattern.len()] == *pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(pattern: &str) -> Bitap {
        Bitap::new(pattern, &SearchOptions::default())
    }

    fn tolerant(pattern: &str, threshold: f64) -> Bitap {
        Bitap::new(pattern, &SearchOptions::default().with_threshold(threshold))
    }

    #[test]
    fn test_equal_text_is_perfect() {
        assert_eq!(strict("bob").search("bob"), Some(MatchScore::PERFECT));
    }

    #[test]
    fn test_strict_prefix_matches() {
        let score = strict("billing").search("billing rules").unwrap();
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn test_strict_rejects_offset_occurrence() {
        // "rules" occurs at position 8, which costs 0.08 with distance 100
        assert!(strict("rules").search("billing rules").is_none());
    }

    #[test]
    fn test_strict_is_case_sensitive() {
        assert!(strict("alpha").search("Alpha").is_none());
        assert!(strict("Alpha").search("Alpha").is_some());
    }

    #[test]
    fn test_case_insensitive_folds_both_sides() {
        let bitap = Bitap::new(
            "ALPHA",
            &SearchOptions::default().with_case_sensitive(false),
        );
        assert_eq!(bitap.pattern(), "alpha");
        assert!(bitap.search("Alpha").is_some());
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(strict("bob").search("").is_none());
        assert!(strict("").search("bob").is_none());
    }

    #[test]
    fn test_single_substitution_within_threshold() {
        let score = tolerant("bob", 0.5).search("bab").unwrap();
        assert!((score.value() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_substitution_rejected_when_strict() {
        assert!(strict("bob").search("bab").is_none());
    }

    #[test]
    fn test_offset_occurrence_scores_by_distance() {
        let score = tolerant("rules", 0.2).search("billing rules").unwrap();
        assert!((score.value() - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance_requires_expected_location() {
        let mut options = SearchOptions::default().with_threshold(0.5);
        options.distance = 0;
        let bitap = Bitap::new("rules", &options);
        assert!(bitap.search("billing rules").is_none());
        assert!(bitap.search("rules apply").is_some());
    }

    #[test]
    fn test_pattern_truncated_to_max_length() {
        let long = "a".repeat(40);
        let bitap = strict(&long);
        assert_eq!(bitap.pattern_len(), 32);
        assert!(bitap.search(&"a".repeat(32)).is_some());
    }

    #[test]
    fn test_unvalidated_pattern_length_capped() {
        let mut options = SearchOptions::default();
        options.max_pattern_length = 100;
        let bitap = Bitap::new(&"a".repeat(70), &options);
        assert_eq!(bitap.pattern_len(), MAX_PATTERN_LENGTH);
        assert!(bitap.search("aaaa").is_none());
        assert!(bitap.search(&"a".repeat(40)).is_some());
    }

    #[test]
    fn test_far_location_does_not_overflow() {
        let mut options = SearchOptions::default().with_threshold(1.0);
        options.location = usize::MAX;
        let bitap = Bitap::new("bob", &options);
        assert!(bitap.search("bobby").is_none());
        assert_eq!(bitap.search("bob"), Some(MatchScore::PERFECT));
    }

    #[test]
    fn test_alphabet_masks_repeated_chars() {
        let alphabet = pattern_alphabet(&['b', 'o', 'b']);
        assert_eq!(alphabet[&'b'], 0b101);
        assert_eq!(alphabet[&'o'], 0b010);
    }

    #[test]
    fn test_find_helpers() {
        let text: Vec<char> = "abcabc".chars().collect();
        let pattern: Vec<char> = "abc".chars().collect();
        assert_eq!(find_from(&text, &pattern, 0), Some(0));
        assert_eq!(find_from(&text, &pattern, 1), Some(3));
        assert_eq!(find_from(&text, &pattern, 4), None);
        assert_eq!(rfind_until(&text, &pattern, 10), Some(3));
        assert_eq!(rfind_until(&text, &pattern, 2), Some(0));
        assert_eq!(find_from(&pattern, &text, 0), None);
    }
}
