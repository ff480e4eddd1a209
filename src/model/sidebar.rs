use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::channel::Channel;
use super::selection::Selection;

/// The whole sidebar: categories in display order, the channel table they
/// reference, per-category collapse state, and the multi-select state.
///
/// The struct owns state only; reordering and selection live in
/// `crate::ops` as free functions over `&Sidebar` / `&mut Sidebar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sidebar {
    /// Categories top to bottom
    pub categories: Vec<Category>,
    /// Channels by id, in registration order
    pub channels: IndexMap<String, Channel>,
    /// Ids of collapsed categories
    #[serde(default)]
    pub collapsed: BTreeSet<String>,
    /// Multi-select state
    #[serde(default)]
    pub selection: Selection,
}

impl Sidebar {
    pub fn new() -> Self {
        Sidebar::default()
    }

    /// Look up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Look up a category by id, mutable.
    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// Look up a channel by id.
    pub fn channel(&self, channel_id: &str) -> Option<&Channel> {
        self.channels.get(channel_id)
    }

    /// Look up a channel by id, mutable.
    pub fn channel_mut(&mut self, channel_id: &str) -> Option<&mut Channel> {
        self.channels.get_mut(channel_id)
    }

    /// Whether a channel id is skipped by visible projections. Archived
    /// channels are hidden; so are ids with no channel record, since the
    /// sidebar has nothing to show for them.
    pub fn is_hidden(&self, channel_id: &str) -> bool {
        self.channels
            .get(channel_id)
            .is_none_or(|channel| channel.is_archived())
    }

    /// The category currently holding a channel, if any.
    pub fn category_of(&self, channel_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(channel_id))
    }
}
