//! Rules engine state snapshots

use rulebooks_domain::RulebookRecord;
use serde::Serialize;

/// Rulebook slice of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulebooksState {
    /// Rulebooks in store order
    pub list: Vec<RulebookRecord>,
    /// Currently selected rulebook
    pub active_rulebook: Option<String>,
    /// Whether rulebook creation was requested
    pub create_rulebook: bool,
}

impl RulebooksState {
    /// Rulebook with the given id
    pub fn find(&self, id: &str) -> Option<&RulebookRecord> {
        self.list.iter().find(|rulebook| rulebook.id == id)
    }
}

/// Immutable point-in-time view of the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RulesEngineState {
    pub rulebooks: RulebooksState,
}

impl RulesEngineState {
    pub fn with_rulebooks(list: Vec<RulebookRecord>) -> Self {
        Self {
            rulebooks: RulebooksState {
                list,
                ..Default::default()
            },
        }
    }
}
