use serde::{Deserialize, Serialize};

/// How a category orders its channels for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySorting {
    /// Case-insensitive by channel display name
    Alphabetical,
    /// Most recent activity first
    Recency,
    /// User-managed: the canonical sequence is the display order
    #[default]
    Manual,
}

/// A named partition of the sidebar with its own channel ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque category identifier
    pub id: String,
    /// Name shown on the category header
    pub display_name: String,
    /// Display ordering mode
    #[serde(default)]
    pub sorting: CategorySorting,
    /// Canonical channel order: every member channel id, archived ones
    /// included, duplicate-free
    #[serde(default)]
    pub channel_ids: Vec<String>,
}

impl Category {
    /// Create an empty category with manual ordering.
    pub fn new(id: String, display_name: String) -> Self {
        Category {
            id,
            display_name,
            sorting: CategorySorting::Manual,
            channel_ids: Vec::new(),
        }
    }

    /// Position of a channel in the canonical sequence.
    pub fn position(&self, channel_id: &str) -> Option<usize> {
        self.channel_ids.iter().position(|id| id == channel_id)
    }

    /// Whether the category holds this channel (archived or not).
    pub fn contains(&self, channel_id: &str) -> bool {
        self.position(channel_id).is_some()
    }
}
