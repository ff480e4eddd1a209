use serde::{Deserialize, Serialize};

/// A channel as the sidebar sees it: identity, the name it displays, and
/// the two timestamps ordering and visibility derive from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Opaque channel identifier
    pub id: String,
    /// Name shown in the sidebar (drives alphabetical sorting)
    pub display_name: String,
    /// Archive timestamp in epoch millis; 0 means the channel is live
    #[serde(default)]
    pub delete_at: i64,
    /// Timestamp of the latest activity in epoch millis (drives recency sorting)
    #[serde(default)]
    pub last_activity_at: i64,
}

impl Channel {
    /// Create a live channel with no recorded activity.
    pub fn new(id: String, display_name: String) -> Self {
        Channel {
            id,
            display_name,
            delete_at: 0,
            last_activity_at: 0,
        }
    }

    /// Whether the channel has been archived (soft-deleted). Archived
    /// channels keep their place in a category's canonical sequence but are
    /// skipped by every visible projection.
    pub fn is_archived(&self) -> bool {
        self.delete_at > 0
    }
}
