//! Pure state transitions

use crate::action::RulesEngineAction;
use crate::state::{RulebooksState, RulesEngineState};

/// Compute the state following `action`
pub fn reduce(state: &RulesEngineState, action: &RulesEngineAction) -> RulesEngineState {
    RulesEngineState {
        rulebooks: reduce_rulebooks(&state.rulebooks, action),
    }
}

fn reduce_rulebooks(state: &RulebooksState, action: &RulesEngineAction) -> RulebooksState {
    match action {
        RulesEngineAction::SetRulebooks { rulebooks } => {
            let mut next = RulebooksState {
                list: rulebooks.clone(),
                active_rulebook: None,
                create_rulebook: state.create_rulebook,
            };
            next.active_rulebook = state
                .active_rulebook
                .clone()
                .filter(|id| next.find(id).is_some());
            next
        }
        RulesEngineAction::SetActiveRulebook { active_rulebook } => RulebooksState {
            active_rulebook: Some(active_rulebook.clone()),
            create_rulebook: false,
            ..state.clone()
        },
        RulesEngineAction::SetCreateRulebook { is_create } => RulebooksState {
            active_rulebook: if *is_create {
                None
            } else {
                state.active_rulebook.clone()
            },
            create_rulebook: *is_create,
            ..state.clone()
        },
        RulesEngineAction::Reset => RulebooksState::default(),
    }
}
