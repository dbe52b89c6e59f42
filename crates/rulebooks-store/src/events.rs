//! Events broadcast by the store to async observers

use serde::{Deserialize, Serialize};

use crate::action::RulesEngineAction;

/// Store event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreEvent {
    /// A dispatched action produced a new snapshot
    StateChanged {
        /// The action that was applied
        action: RulesEngineAction,
    },
}
