//! Actions accepted by the rules engine store
//!
//! Actions serialize as `{ "type": ..., "payload": ... }` messages.

use rulebooks_domain::RulebookRecord;
use serde::{Deserialize, Serialize};

/// A request to change the rules engine state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum RulesEngineAction {
    /// Replace the rulebook list
    #[serde(rename = "SETRULEBOOKS")]
    SetRulebooks {
        /// New rulebook list
        rulebooks: Vec<RulebookRecord>,
    },
    /// Select a rulebook
    #[serde(rename = "SETACTIVERULEBOOK", rename_all = "camelCase")]
    SetActiveRulebook {
        /// Identifier of the rulebook to select
        active_rulebook: String,
    },
    /// Enter or leave rulebook creation
    #[serde(rename = "SETCREATERULEBOOK", rename_all = "camelCase")]
    SetCreateRulebook {
        /// Whether creation was requested
        is_create: bool,
    },
    /// Return to the initial state
    #[serde(rename = "RESET")]
    Reset,
}

impl RulesEngineAction {
    /// The message type tag
    pub fn action_type(&self) -> &'static str {
        match self {
            RulesEngineAction::SetRulebooks { .. } => "SETRULEBOOKS",
            RulesEngineAction::SetActiveRulebook { .. } => "SETACTIVERULEBOOK",
            RulesEngineAction::SetCreateRulebook { .. } => "SETCREATERULEBOOK",
            RulesEngineAction::Reset => "RESET",
        }
    }
}
