//! The state source seam consumed by views

use std::sync::Arc;

use crate::action::RulesEngineAction;
use crate::state::RulesEngineState;
use crate::subscription::{Listener, Subscription};

/// An observable source of rules engine state
///
/// Views receive an implementation at construction instead of reaching for
/// a global store, so tests can substitute their own.
pub trait StateSource: Send + Sync {
    /// Current snapshot
    fn current(&self) -> Arc<RulesEngineState>;

    /// Register `listener` to run after every change
    fn on_change(&self, listener: Listener) -> Subscription;

    /// Request a state change
    fn dispatch(&self, action: RulesEngineAction);
}

impl<S: StateSource + ?Sized> StateSource for Arc<S> {
    fn current(&self) -> Arc<RulesEngineState> {
        (**self).current()
    }

    fn on_change(&self, listener: Listener) -> Subscription {
        (**self).on_change(listener)
    }

    fn dispatch(&self, action: RulesEngineAction) {
        (**self).dispatch(action)
    }
}
