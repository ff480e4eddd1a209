use serde::{Deserialize, Serialize};

/// Multi-select state: which channels are selected and where the next range
/// gesture anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected channel ids, duplicate-free. After a range gesture this is
    /// ascending display order; after toggles it is click order.
    #[serde(default)]
    pub selected: Vec<String>,
    /// Anchor of the most recent gesture; range selection extends from here
    #[serde(default)]
    pub last_selected: Option<String>,
}

impl Selection {
    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected channels.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether this channel is currently selected.
    pub fn contains(&self, channel_id: &str) -> bool {
        self.selected.iter().any(|id| id == channel_id)
    }

    /// Drop the selection and its anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.last_selected = None;
    }
}
