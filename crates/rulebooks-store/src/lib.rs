//! Rules engine store
//!
//! An observable, process-wide container for the rulebook list. Views read
//! immutable snapshots, register change listeners through scoped
//! [`Subscription`] guards, and request changes by dispatching
//! [`RulesEngineAction`]s, which a pure reducer folds into the next snapshot.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use rulebooks_store::{RulesEngineAction, RulesEngineStore};
//!
//! let store = RulesEngineStore::new();
//! let calls = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&calls);
//! let subscription = store.subscribe(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store.dispatch(RulesEngineAction::SetCreateRulebook { is_create: true });
//! assert!(store.get_state().rulebooks.create_rulebook);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//!
//! drop(subscription);
//! assert_eq!(store.subscriber_count(), 0);
//! ```

pub mod action;
pub mod catalog;
pub mod error;
pub mod events;
pub mod reducer;
pub mod source;
pub mod state;
pub mod store;
pub mod subscription;

pub use action::RulesEngineAction;
pub use catalog::{load_catalog, parse_catalog, CatalogFormat};
pub use error::{Result, StoreError};
pub use events::StoreEvent;
pub use reducer::reduce;
pub use source::StateSource;
pub use state::{RulebooksState, RulesEngineState};
pub use store::RulesEngineStore;
pub use subscription::{Listener, Subscription};
