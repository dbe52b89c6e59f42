//! Change listeners and their scoped registrations

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

/// Callback invoked after every state change
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// A live listener registration
///
/// Dropping the guard (or calling [`Subscription::unsubscribe`]) releases the
/// registration; no notification is delivered afterwards.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap the action that releases a registration
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the registration now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Listeners keyed by registration order
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: RwLock<BTreeMap<u64, Listener>>,
}

impl ListenerRegistry {
    pub(crate) fn register(self: &Arc<Self>, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.write().insert(id, listener);

        let registry: Weak<Self> = Arc::downgrade(self);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.listeners.write().remove(&id);
            }
        })
    }

    /// Listeners to notify, cloned out so none run under the lock
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.listeners.read().values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_drop_releases_registration() {
        let registry = Arc::new(ListenerRegistry::default());
        let subscription = registry.register(Arc::new(|| {}));
        assert_eq!(registry.len(), 1);

        drop(subscription);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_unsubscribe_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let subscription = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscription.unsubscribe();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_after_registry_dropped() {
        let registry = Arc::new(ListenerRegistry::default());
        let subscription = registry.register(Arc::new(|| {}));
        drop(registry);

        // Must not panic
        drop(subscription);
    }

    #[test]
    fn test_snapshot_in_registration_order() {
        let registry = Arc::new(ListenerRegistry::default());
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let mut subscriptions = Vec::new();
        for index in 0..3 {
            let order = Arc::clone(&order);
            subscriptions.push(registry.register(Arc::new(move || order.lock().push(index))));
        }

        for listener in registry.snapshot() {
            listener();
        }
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }
}
