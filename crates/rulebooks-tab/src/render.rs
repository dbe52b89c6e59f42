//! Rendering seam between the tab and its host

use rulebooks_domain::RulebookRecord;

/// Draws the pieces of a rulebooks tab
///
/// The tab calls the methods in display order: the search input, the
/// "create new" affordance, then one call per visible rulebook.
pub trait RulebookRenderer {
    /// Draw the search input
    fn render_search_input(&mut self, _placeholder: &str, _value: &str) {}

    /// Draw the static "create new" affordance
    fn render_create_affordance(&mut self, label: &str);

    /// Draw one visible rulebook
    fn render_rulebook(&mut self, rulebook: &RulebookRecord);
}

/// One entry of the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabItem {
    /// The "create new" affordance
    CreateRulebook { label: String },
    /// A visible rulebook
    Rulebook(RulebookRecord),
}

/// The tab rendered as plain data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabView {
    pub search_placeholder: String,
    pub search_str: String,
    pub items: Vec<TabItem>,
}

impl TabView {
    /// Visible rulebooks, skipping the create affordance
    pub fn rulebooks(&self) -> impl Iterator<Item = &RulebookRecord> {
        self.items.iter().filter_map(|item| match item {
            TabItem::Rulebook(rulebook) => Some(rulebook),
            TabItem::CreateRulebook { .. } => None,
        })
    }
}

impl RulebookRenderer for TabView {
    fn render_search_input(&mut self, placeholder: &str, value: &str) {
        self.search_placeholder = placeholder.to_string();
        self.search_str = value.to_string();
    }

    fn render_create_affordance(&mut self, label: &str) {
        self.items.push(TabItem::CreateRulebook {
            label: label.to_string(),
        });
    }

    fn render_rulebook(&mut self, rulebook: &RulebookRecord) {
        self.items.push(TabItem::Rulebook(rulebook.clone()));
    }
}
