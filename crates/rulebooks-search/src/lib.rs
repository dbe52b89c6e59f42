//! Fuzzy search for rulebooks
//!
//! This crate provides a Bitap (shift-or) approximate matcher and a generic
//! searcher that scores items across a configurable set of text fields.
//! Scores follow the Bitap convention: `0.0` is a perfect match and larger
//! values mean more errors or a match further from the expected location.
//!
//! # Example
//!
//! ```rust
//! use rulebooks_domain::RulebookRecord;
//! use rulebooks_search::filter_rulebooks;
//!
//! let records = vec![
//!     RulebookRecord::new("r1").with_user("bob").with_description("billing rules"),
//!     RulebookRecord::new("r2").with_user("alice").with_description("shipping rules"),
//! ];
//!
//! let visible = filter_rulebooks(&records, "bob");
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "r1");
//! ```

pub mod bitap;
pub mod error;
pub mod options;
pub mod rulebooks;
pub mod searcher;

pub use bitap::Bitap;
pub use error::{Result, SearchError};
pub use options::{SearchOptions, MAX_OFFSET, MAX_PATTERN_LENGTH};
pub use rulebooks::{filter_rulebooks, RULEBOOK_SEARCH_KEYS};
pub use searcher::{FuzzyMatch, FuzzySearcher, MatchScore, Searchable};
