//! Rulebook data model
//!
//! A rulebook is a named, owned collection of rules with a description. The
//! records defined here are produced by the rules engine store and consumed
//! read-only by views and the search filter.

use serde::{Deserialize, Serialize};

/// Reference to a rule contained in a rulebook
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// Rule identifier
    pub id: String,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RuleDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A rulebook as held by the rules engine store
///
/// Every field falls back to its default when absent, so a partially
/// populated record still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulebookRecord {
    /// Unique rulebook identifier (also its display name)
    pub id: String,
    /// Owner name
    pub user: String,
    /// Rules contained in the rulebook
    pub rules: Vec<RuleDescriptor>,
    /// Free-form description
    pub description: String,
    /// Where the rulebook came from
    pub source: String,
}

impl RulebookRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_rules(mut self, rules: Vec<RuleDescriptor>) -> Self {
        self.rules = rules;
        self
    }
}
