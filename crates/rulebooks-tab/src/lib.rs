//! Rulebooks tab
//!
//! A framework-independent view controller that lists rulebooks from an
//! injected [`StateSource`](rulebooks_store::StateSource), filters them by a
//! search string and requests creation of new rulebooks. Hosts draw the
//! result through a [`RulebookRenderer`] or take a plain [`TabView`].

pub mod error;
pub mod logging;
pub mod render;
pub mod tab;

pub use error::{Result, TabError};
pub use render::{RulebookRenderer, TabItem, TabView};
pub use tab::RuleBooksTab;
