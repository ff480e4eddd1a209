use std::cmp::Reverse;

use crate::model::category::{Category, CategorySorting};
use crate::model::sidebar::Sidebar;

/// Error type for category operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category not found: {0}")]
    NotFound(String),
    #[error("category already registered: {0}")]
    AlreadyExists(String),
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// The category's visible projection: its canonical sequence with archived
/// and unknown channels skipped. Order is canonical regardless of the
/// category's sorting mode; this is the list drop slots are counted in.
pub fn visible_channel_ids(sidebar: &Sidebar, category: &Category) -> Vec<String> {
    category
        .channel_ids
        .iter()
        .filter(|id| !sidebar.is_hidden(id))
        .cloned()
        .collect()
}

/// The category's channels as rendered: visible channels only, ordered per
/// the category's sorting mode. Manual keeps the canonical order;
/// alphabetical compares display names case-insensitively (ids break
/// ties); recency puts the most recent activity first.
pub fn displayed_channel_ids(sidebar: &Sidebar, category: &Category) -> Vec<String> {
    let mut ids = visible_channel_ids(sidebar, category);
    match category.sorting {
        CategorySorting::Manual => {}
        CategorySorting::Alphabetical => {
            ids.sort_by_cached_key(|id| {
                let name = sidebar
                    .channel(id)
                    .map(|channel| channel.display_name.to_lowercase())
                    .unwrap_or_default();
                (name, id.clone())
            });
        }
        CategorySorting::Recency => {
            ids.sort_by_key(|id| {
                Reverse(
                    sidebar
                        .channel(id)
                        .map(|channel| channel.last_activity_at)
                        .unwrap_or_default(),
                )
            });
        }
    }
    ids
}

/// Every displayed channel across the sidebar, category by category, as a
/// single flat list. Range selection runs over this order. Collapse is a
/// rendering concern only, so collapsed categories still contribute their
/// channels here.
pub fn flattened_display_order(sidebar: &Sidebar) -> Vec<String> {
    sidebar
        .categories
        .iter()
        .flat_map(|category| displayed_channel_ids(sidebar, category))
        .collect()
}

// ---------------------------------------------------------------------------
// Collapse state
// ---------------------------------------------------------------------------

/// Record whether a category is drawn collapsed. Pure preference: unknown
/// category ids are accepted and simply remembered.
pub fn set_category_collapsed(sidebar: &mut Sidebar, category_id: &str, collapsed: bool) {
    if collapsed {
        sidebar.collapsed.insert(category_id.to_string());
    } else {
        sidebar.collapsed.remove(category_id);
    }
}

pub fn is_category_collapsed(sidebar: &Sidebar, category_id: &str) -> bool {
    sidebar.collapsed.contains(category_id)
}

// ---------------------------------------------------------------------------
// Category lifecycle
// ---------------------------------------------------------------------------

/// Append a new category to the sidebar.
pub fn add_category(sidebar: &mut Sidebar, category: Category) -> Result<(), CategoryError> {
    if sidebar.category(&category.id).is_some() {
        return Err(CategoryError::AlreadyExists(category.id));
    }
    sidebar.categories.push(category);
    Ok(())
}

/// Delete a category and hand back the channel ids it held, in canonical
/// order. The caller decides where the orphans go (typically re-filed into
/// a default category). Collapse state and selection entries for the
/// removed channels are dropped.
pub fn remove_category(
    sidebar: &mut Sidebar,
    category_id: &str,
) -> Result<Vec<String>, CategoryError> {
    let index = sidebar
        .categories
        .iter()
        .position(|category| category.id == category_id)
        .ok_or_else(|| CategoryError::NotFound(category_id.to_string()))?;

    let removed = sidebar.categories.remove(index);
    sidebar.collapsed.remove(category_id);
    sidebar
        .selection
        .selected
        .retain(|id| !removed.channel_ids.contains(id));
    if let Some(anchor) = &sidebar.selection.last_selected
        && removed.channel_ids.contains(anchor)
    {
        sidebar.selection.last_selected = None;
    }
    Ok(removed.channel_ids)
}

/// Move a category to a new position in the sidebar's category order.
/// Targets past the end clamp to the end.
pub fn move_category(
    sidebar: &mut Sidebar,
    category_id: &str,
    target: usize,
) -> Result<(), CategoryError> {
    let index = sidebar
        .categories
        .iter()
        .position(|category| category.id == category_id)
        .ok_or_else(|| CategoryError::NotFound(category_id.to_string()))?;

    let category = sidebar.categories.remove(index);
    let target = target.min(sidebar.categories.len());
    sidebar.categories.insert(target, category);
    Ok(())
}

/// Switch a category's sorting mode. The canonical sequence is untouched;
/// going back to manual restores the last manual order.
pub fn set_category_sorting(
    sidebar: &mut Sidebar,
    category_id: &str,
    sorting: CategorySorting,
) -> Result<(), CategoryError> {
    let category = sidebar
        .category_mut(category_id)
        .ok_or_else(|| CategoryError::NotFound(category_id.to_string()))?;
    category.sorting = sorting;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::channel::Channel;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// Two categories; "beta" in the first is archived.
    fn sample_sidebar() -> Sidebar {
        let mut sidebar = Sidebar::new();

        let mut first = Category::new("first".into(), "First".into());
        for (id, name, archived, activity) in [
            ("alpha", "Maple", false, 30),
            ("beta", "Aspen", true, 50),
            ("gamma", "birch", false, 10),
            ("delta", "Cedar", false, 40),
        ] {
            let mut channel = Channel::new(id.into(), name.into());
            if archived {
                channel.delete_at = 1;
            }
            channel.last_activity_at = activity;
            sidebar.channels.insert(id.into(), channel);
            first.channel_ids.push(id.into());
        }
        sidebar.categories.push(first);

        let mut second = Category::new("second".into(), "Second".into());
        for (id, name, activity) in [("epsilon", "Oak", 20), ("zeta", "Elm", 60)] {
            let mut channel = Channel::new(id.into(), name.into());
            channel.last_activity_at = activity;
            sidebar.channels.insert(id.into(), channel);
            second.channel_ids.push(id.into());
        }
        sidebar.categories.push(second);

        sidebar
    }

    #[test]
    fn test_visible_skips_archived() {
        let sidebar = sample_sidebar();
        let first = sidebar.category("first").unwrap();
        assert_eq!(
            visible_channel_ids(&sidebar, first),
            ids(&["alpha", "gamma", "delta"])
        );
    }

    #[test]
    fn test_visible_skips_unknown_ids() {
        let mut sidebar = sample_sidebar();
        sidebar
            .category_mut("first")
            .unwrap()
            .channel_ids
            .push("ghost".into());
        let first = sidebar.category("first").unwrap();
        assert_eq!(
            visible_channel_ids(&sidebar, first),
            ids(&["alpha", "gamma", "delta"])
        );
    }

    #[test]
    fn test_displayed_manual_keeps_canonical_order() {
        let sidebar = sample_sidebar();
        let first = sidebar.category("first").unwrap();
        assert_eq!(
            displayed_channel_ids(&sidebar, first),
            ids(&["alpha", "gamma", "delta"])
        );
    }

    #[test]
    fn test_displayed_alphabetical_ignores_case() {
        let mut sidebar = sample_sidebar();
        set_category_sorting(&mut sidebar, "first", CategorySorting::Alphabetical).unwrap();
        let first = sidebar.category("first").unwrap();
        // birch < Cedar < Maple once case is folded
        assert_eq!(
            displayed_channel_ids(&sidebar, first),
            ids(&["gamma", "delta", "alpha"])
        );
    }

    #[test]
    fn test_displayed_recency_most_recent_first() {
        let mut sidebar = sample_sidebar();
        set_category_sorting(&mut sidebar, "first", CategorySorting::Recency).unwrap();
        let first = sidebar.category("first").unwrap();
        assert_eq!(
            displayed_channel_ids(&sidebar, first),
            ids(&["delta", "alpha", "gamma"])
        );
    }

    #[test]
    fn test_flattened_follows_category_order() {
        let sidebar = sample_sidebar();
        assert_eq!(
            flattened_display_order(&sidebar),
            ids(&["alpha", "gamma", "delta", "epsilon", "zeta"])
        );
    }

    #[test]
    fn test_flattened_includes_collapsed_categories() {
        let mut sidebar = sample_sidebar();
        set_category_collapsed(&mut sidebar, "first", true);
        assert_eq!(
            flattened_display_order(&sidebar),
            ids(&["alpha", "gamma", "delta", "epsilon", "zeta"])
        );
    }

    #[test]
    fn test_collapse_round_trip() {
        let mut sidebar = sample_sidebar();
        assert!(!is_category_collapsed(&sidebar, "first"));
        set_category_collapsed(&mut sidebar, "first", true);
        assert!(is_category_collapsed(&sidebar, "first"));
        set_category_collapsed(&mut sidebar, "first", false);
        assert!(!is_category_collapsed(&sidebar, "first"));
    }

    #[test]
    fn test_add_category_rejects_duplicate_id() {
        let mut sidebar = sample_sidebar();
        let duplicate = Category::new("first".into(), "First Again".into());
        assert!(matches!(
            add_category(&mut sidebar, duplicate),
            Err(CategoryError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_remove_category_returns_orphans_in_canonical_order() {
        let mut sidebar = sample_sidebar();
        sidebar.selection.selected = ids(&["gamma", "zeta"]);
        sidebar.selection.last_selected = Some("gamma".into());
        set_category_collapsed(&mut sidebar, "first", true);

        let orphans = remove_category(&mut sidebar, "first").unwrap();
        assert_eq!(orphans, ids(&["alpha", "beta", "gamma", "delta"]));
        assert!(sidebar.category("first").is_none());
        assert!(!is_category_collapsed(&sidebar, "first"));
        assert_eq!(sidebar.selection.selected, ids(&["zeta"]));
        assert_eq!(sidebar.selection.last_selected, None);
    }

    #[test]
    fn test_move_category_clamps_target() {
        let mut sidebar = sample_sidebar();
        move_category(&mut sidebar, "first", 9).unwrap();
        let order: Vec<&str> = sidebar
            .categories
            .iter()
            .map(|category| category.id.as_str())
            .collect();
        assert_eq!(order, ["second", "first"]);
    }

    #[test]
    fn test_move_category_unknown_id() {
        let mut sidebar = sample_sidebar();
        assert!(matches!(
            move_category(&mut sidebar, "nope", 0),
            Err(CategoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_sorting_switch_keeps_canonical_sequence() {
        let mut sidebar = sample_sidebar();
        set_category_sorting(&mut sidebar, "first", CategorySorting::Alphabetical).unwrap();
        set_category_sorting(&mut sidebar, "first", CategorySorting::Manual).unwrap();
        assert_eq!(
            sidebar.category("first").unwrap().channel_ids,
            ids(&["alpha", "beta", "gamma", "delta"])
        );
    }
}
