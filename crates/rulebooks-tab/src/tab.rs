//! Rulebooks tab view controller
//!
//! The tab owns two independent pieces of state:
//! - the search string, replaced verbatim on every input change
//! - the latest rulebook snapshot, replaced whenever the source notifies
//!
//! The visible list is derived from both on every render and never stored.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rulebooks_domain::RulebookRecord;
//! use rulebooks_store::RulesEngineStore;
//! use rulebooks_tab::RuleBooksTab;
//!
//! let store = Arc::new(RulesEngineStore::with_rulebooks(vec![
//!     RulebookRecord::new("r1").with_user("bob"),
//!     RulebookRecord::new("r2").with_user("alice"),
//! ]));
//!
//! let mut tab = RuleBooksTab::new(Arc::clone(&store));
//! tab.mount();
//! tab.update_search_str("bob");
//!
//! let visible = tab.visible_rulebooks();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "r1");
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rulebooks_config::{ConfigManagerTrait, RulebooksConfig, TabConfig};
use rulebooks_domain::RulebookRecord;
use rulebooks_search::FuzzySearcher;
use rulebooks_store::{RulesEngineAction, RulesEngineState, StateSource, Subscription};
use tracing::{debug, info};

use crate::error::Result;
use crate::render::{RulebookRenderer, TabView};

/// Searchable list of rulebooks with a "create new" affordance
pub struct RuleBooksTab<S: StateSource + 'static> {
    source: Arc<S>,
    search_str: String,
    snapshot: Arc<RwLock<Arc<RulesEngineState>>>,
    searcher: FuzzySearcher,
    labels: TabConfig,
    subscription: Option<Subscription>,
}

impl<S: StateSource + 'static> RuleBooksTab<S> {
    /// Create a tab with default search options and labels
    pub fn new(source: Arc<S>) -> Self {
        Self::build(source, FuzzySearcher::default(), TabConfig::default())
    }

    /// Create a tab from loaded configuration
    pub fn with_config(source: Arc<S>, config: &RulebooksConfig) -> Result<Self> {
        let searcher = FuzzySearcher::new(config.search.clone())?;
        Ok(Self::build(source, searcher, config.tab.clone()))
    }

    /// Create a tab from configuration loaded through `manager`
    pub fn from_manager<M: ConfigManagerTrait>(source: Arc<S>, manager: &mut M) -> Result<Self> {
        let config = manager.load_config()?;
        Self::with_config(source, &config)
    }

    fn build(source: Arc<S>, searcher: FuzzySearcher, labels: TabConfig) -> Self {
        let snapshot = Arc::new(RwLock::new(source.current()));
        Self {
            source,
            search_str: String::new(),
            snapshot,
            searcher,
            labels,
            subscription: None,
        }
    }

    /// Start following the source; mounting twice keeps one registration
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let source = Arc::downgrade(&self.source);
        let snapshot = Arc::clone(&self.snapshot);
        let subscription = self.source.on_change(Arc::new(move || {
            if let Some(source) = source.upgrade() {
                *snapshot.write() = source.current();
            }
        }));

        // Catch up with changes made between construction and mount
        *self.snapshot.write() = self.source.current();
        self.subscription = Some(subscription);
        info!(rulebooks = self.rulebook_count(), "Rulebooks tab mounted");
    }

    /// Stop following the source
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            info!("Rulebooks tab unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current search string, exactly as typed
    pub fn search_str(&self) -> &str {
        &self.search_str
    }

    /// Replace the search string with the raw input value
    pub fn update_search_str(&mut self, value: impl Into<String>) {
        self.search_str = value.into();
        debug!(len = self.search_str.chars().count(), "Search string updated");
    }

    /// Latest snapshot received from the source
    pub fn snapshot(&self) -> Arc<RulesEngineState> {
        Arc::clone(&self.snapshot.read())
    }

    /// Rulebooks held by the tab, in store order
    pub fn rulebooks(&self) -> Vec<RulebookRecord> {
        self.snapshot().rulebooks.list.clone()
    }

    pub fn rulebook_count(&self) -> usize {
        self.snapshot.read().rulebooks.list.len()
    }

    /// Ask the source to start creating a rulebook
    pub fn create_new_rulebook(&self) {
        info!("Requesting rulebook creation");
        self.source
            .dispatch(RulesEngineAction::SetCreateRulebook { is_create: true });
    }

    /// Rulebooks matching the current search string
    pub fn visible_rulebooks(&self) -> Vec<RulebookRecord> {
        let snapshot = self.snapshot();
        self.searcher
            .filter(&snapshot.rulebooks.list, &self.search_str)
    }

    /// Draw the tab: search input, create affordance, then visible rulebooks
    pub fn render<R: RulebookRenderer + ?Sized>(&self, renderer: &mut R) {
        let snapshot = self.snapshot();
        let visible = self
            .searcher
            .search(&snapshot.rulebooks.list, &self.search_str);

        renderer.render_search_input(&self.labels.search_placeholder, &self.search_str);
        renderer.render_create_affordance(&self.labels.create_label);
        for found in visible {
            renderer.render_rulebook(found.item);
        }
    }

    /// The tab rendered as plain data
    pub fn view(&self) -> TabView {
        let mut view = TabView::default();
        self.render(&mut view);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rulebooks_store::{Listener, RulesEngineStore};

    use crate::render::TabItem;

    /// Source with a fixed snapshot that records dispatched actions
    #[derive(Default)]
    struct RecordingSource {
        state: Arc<RulesEngineState>,
        dispatched: Mutex<Vec<RulesEngineAction>>,
    }

    impl StateSource for RecordingSource {
        fn current(&self) -> Arc<RulesEngineState> {
            Arc::clone(&self.state)
        }

        fn on_change(&self, _listener: Listener) -> Subscription {
            Subscription::new(|| {})
        }

        fn dispatch(&self, action: RulesEngineAction) {
            self.dispatched.lock().push(action);
        }
    }

    fn sample() -> Vec<RulebookRecord> {
        vec![
            RulebookRecord::new("r1")
                .with_user("bob")
                .with_description("billing rules"),
            RulebookRecord::new("r2")
                .with_user("alice")
                .with_description("shipping rules"),
        ]
    }

    fn ids(records: &[RulebookRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let tab = RuleBooksTab::new(store);
        assert_eq!(tab.search_str(), "");
        assert_eq!(tab.rulebooks(), sample());
        assert!(!tab.is_mounted());
    }

    #[test]
    fn test_search_scenarios() {
        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let mut tab = RuleBooksTab::new(store);

        assert_eq!(ids(&tab.visible_rulebooks()), vec!["r1", "r2"]);

        tab.update_search_str("bob");
        assert_eq!(ids(&tab.visible_rulebooks()), vec!["r1"]);

        tab.update_search_str("zzz");
        assert!(tab.visible_rulebooks().is_empty());
    }

    #[test]
    fn test_search_str_kept_verbatim() {
        let mut tab = RuleBooksTab::new(Arc::new(RulesEngineStore::new()));
        tab.update_search_str("  bob ");
        assert_eq!(tab.search_str(), "  bob ");
    }

    #[test]
    fn test_create_dispatches_once_without_local_change() {
        let source = Arc::new(RecordingSource {
            state: Arc::new(RulesEngineState::with_rulebooks(sample())),
            ..Default::default()
        });
        let mut tab = RuleBooksTab::new(Arc::clone(&source));
        tab.update_search_str("bob");

        tab.create_new_rulebook();

        assert_eq!(
            *source.dispatched.lock(),
            vec![RulesEngineAction::SetCreateRulebook { is_create: true }]
        );
        assert_eq!(tab.search_str(), "bob");
        assert_eq!(tab.rulebooks(), sample());
    }

    #[test]
    fn test_notification_replaces_rulebooks() {
        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let mut tab = RuleBooksTab::new(Arc::clone(&store));
        tab.mount();

        store.dispatch(RulesEngineAction::SetRulebooks {
            rulebooks: vec![RulebookRecord::new("r3")],
        });

        assert_eq!(ids(&tab.rulebooks()), vec!["r3"]);
    }

    #[test]
    fn test_unmounted_tab_keeps_old_snapshot() {
        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let mut tab = RuleBooksTab::new(Arc::clone(&store));
        tab.mount();
        tab.unmount();

        store.dispatch(RulesEngineAction::SetRulebooks { rulebooks: vec![] });

        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(tab.rulebook_count(), 2);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let store = Arc::new(RulesEngineStore::new());
        let mut tab = RuleBooksTab::new(Arc::clone(&store));
        tab.mount();
        tab.mount();
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let store = Arc::new(RulesEngineStore::new());
        let mut tab = RuleBooksTab::new(Arc::clone(&store));
        tab.mount();
        drop(tab);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_mount_catches_up_with_store() {
        let store = Arc::new(RulesEngineStore::new());
        let mut tab = RuleBooksTab::new(Arc::clone(&store));
        store.dispatch(RulesEngineAction::SetRulebooks { rulebooks: sample() });
        assert_eq!(tab.rulebook_count(), 0);

        tab.mount();
        assert_eq!(tab.rulebook_count(), 2);
    }

    #[test]
    fn test_view_puts_create_first() {
        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let mut tab = RuleBooksTab::new(store);
        tab.update_search_str("alice");

        let view = tab.view();
        assert_eq!(view.search_str, "alice");
        assert_eq!(
            view.search_placeholder,
            "Search Rulebook by name, owner or description"
        );
        assert_eq!(
            view.items,
            vec![
                TabItem::CreateRulebook {
                    label: "Create a new Rulebook".to_string()
                },
                TabItem::Rulebook(sample()[1].clone()),
            ]
        );
    }

    #[test]
    fn test_with_config_rejects_invalid_search() {
        let mut config = RulebooksConfig::default();
        config.search.max_pattern_length = 64;
        let result = RuleBooksTab::with_config(Arc::new(RulesEngineStore::new()), &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_manager_reports_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

        let mut manager = rulebooks_config::ConfigManager::with_path(path);
        let result = RuleBooksTab::from_manager(Arc::new(RulesEngineStore::new()), &mut manager);
        assert!(matches!(result, Err(crate::TabError::Config(_))));
    }

    #[test]
    fn test_with_config_uses_labels_and_options() {
        let mut config = RulebooksConfig::default();
        config.search.case_sensitive = false;
        config.tab.create_label = "New rulebook".to_string();

        let store = Arc::new(RulesEngineStore::with_rulebooks(sample()));
        let mut tab = RuleBooksTab::with_config(store, &config).unwrap();
        tab.update_search_str("BOB");

        let view = tab.view();
        assert_eq!(
            view.items[0],
            TabItem::CreateRulebook {
                label: "New rulebook".to_string()
            }
        );
        assert_eq!(view.rulebooks().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["r1"]);
    }
}
