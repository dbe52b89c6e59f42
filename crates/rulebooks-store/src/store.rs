//! Rules engine store implementation

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use rulebooks_domain::RulebookRecord;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::action::RulesEngineAction;
use crate::catalog::load_catalog;
use crate::error::Result;
use crate::events::StoreEvent;
use crate::reducer::reduce;
use crate::source::StateSource;
use crate::state::RulesEngineState;
use crate::subscription::{Listener, ListenerRegistry, Subscription};

/// Channel capacity for broadcast events
const EVENT_CAPACITY: usize = 256;

/// Observable container for the rules engine state
///
/// Listeners run synchronously after each dispatch, outside any store lock,
/// so they may read the store or dispatch again.
pub struct RulesEngineStore {
    state: RwLock<Arc<RulesEngineState>>,
    listeners: Arc<ListenerRegistry>,
    events: broadcast::Sender<StoreEvent>,
}

impl RulesEngineStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_state(RulesEngineState::default())
    }

    /// Create a store holding `rulebooks`
    pub fn with_rulebooks(rulebooks: Vec<RulebookRecord>) -> Self {
        Self::with_state(RulesEngineState::with_rulebooks(rulebooks))
    }

    pub fn with_state(state: RulesEngineState) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: RwLock::new(Arc::new(state)),
            listeners: Arc::new(ListenerRegistry::default()),
            events,
        }
    }

    /// Create a store seeded from a JSON or YAML rulebook catalog
    pub fn from_catalog(path: impl AsRef<Path>) -> Result<Self> {
        let rulebooks = load_catalog(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            count = rulebooks.len(),
            "Loaded rulebook catalog"
        );
        Ok(Self::with_rulebooks(rulebooks))
    }

    /// Current snapshot
    pub fn get_state(&self) -> Arc<RulesEngineState> {
        Arc::clone(&self.state.read())
    }

    /// Register a listener that runs after every dispatch
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.register(Arc::new(listener))
    }

    /// Apply `action`, then notify listeners and broadcast observers
    pub fn dispatch(&self, action: RulesEngineAction) {
        {
            let mut state = self.state.write();
            let next = reduce(&state, &action);
            *state = Arc::new(next);
        }

        let listeners = self.listeners.snapshot();
        debug!(
            action = action.action_type(),
            listeners = listeners.len(),
            "Dispatched rules engine action"
        );
        for listener in listeners {
            listener();
        }

        // No receivers is fine
        let _ = self.events.send(StoreEvent::StateChanged { action });
    }

    /// Receive a [`StoreEvent`] for every dispatch made after this call
    pub fn watch(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Number of live listener registrations
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for RulesEngineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSource for RulesEngineStore {
    fn current(&self) -> Arc<RulesEngineState> {
        self.get_state()
    }

    fn on_change(&self, listener: Listener) -> Subscription {
        self.listeners.register(listener)
    }

    fn dispatch(&self, action: RulesEngineAction) {
        RulesEngineStore::dispatch(self, action);
    }
}
