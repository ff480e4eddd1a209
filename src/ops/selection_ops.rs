use crate::model::sidebar::Sidebar;
use crate::ops::category_ops::flattened_display_order;

/// Error type for selection gestures
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("channel not displayed: {0}")]
    NotDisplayed(String),
}

// ---------------------------------------------------------------------------
// Range computation
// ---------------------------------------------------------------------------

/// The selection a shift-click on `target` would produce, without applying
/// it.
///
/// The range runs from the anchor (the last individually selected channel)
/// to `target` over the flattened display order, so it can span category
/// boundaries, and the result is always in display order whichever side of
/// the anchor the target falls on. An empty prior selection turns the
/// gesture into a plain click on `target`. If the target or the anchor is
/// not currently displayed, or the target *is* the anchor, the prior
/// selection comes back unchanged.
pub fn selection_range(sidebar: &Sidebar, target: &str) -> Vec<String> {
    let prior = sidebar.selection.selected.clone();

    let flattened = flattened_display_order(sidebar);
    let Some(target_index) = flattened.iter().position(|id| id == target) else {
        return prior;
    };
    if prior.is_empty() {
        return vec![target.to_string()];
    }
    let Some(anchor) = &sidebar.selection.last_selected else {
        return prior;
    };
    let Some(anchor_index) = flattened.iter().position(|id| id == anchor) else {
        return prior;
    };
    if anchor_index == target_index {
        return prior;
    }

    let lo = anchor_index.min(target_index);
    let hi = anchor_index.max(target_index);
    flattened[lo..=hi].to_vec()
}

// ---------------------------------------------------------------------------
// Gestures
// ---------------------------------------------------------------------------

/// A channel only reaches the screen while some category files it and it
/// is not hidden; a channel registered in the table alone cannot take a
/// click.
fn is_displayed(sidebar: &Sidebar, channel_id: &str) -> bool {
    sidebar.category_of(channel_id).is_some() && !sidebar.is_hidden(channel_id)
}

/// A plain click: the channel becomes the whole selection and the anchor
/// for later range gestures.
pub fn select_single(sidebar: &mut Sidebar, channel_id: &str) -> Result<(), SelectionError> {
    if !is_displayed(sidebar, channel_id) {
        return Err(SelectionError::NotDisplayed(channel_id.to_string()));
    }
    sidebar.selection.selected = vec![channel_id.to_string()];
    sidebar.selection.last_selected = Some(channel_id.to_string());
    Ok(())
}

/// A ctrl-click: add the channel to the selection, or take it back out if
/// it is already in. Adding moves the anchor to the channel; removing the
/// anchor itself leaves the selection without one.
pub fn toggle_channel(sidebar: &mut Sidebar, channel_id: &str) -> Result<(), SelectionError> {
    if !is_displayed(sidebar, channel_id) {
        return Err(SelectionError::NotDisplayed(channel_id.to_string()));
    }
    let selection = &mut sidebar.selection;
    if let Some(index) = selection.selected.iter().position(|id| id == channel_id) {
        selection.selected.remove(index);
        if selection.last_selected.as_deref() == Some(channel_id) {
            selection.last_selected = None;
        }
    } else {
        selection.selected.push(channel_id.to_string());
        selection.last_selected = Some(channel_id.to_string());
    }
    Ok(())
}

/// A shift-click: replace the selection with [`selection_range`]'s result.
/// The anchor stays where it was so a follow-up shift-click re-ranges from
/// the same spot; only when the gesture acts as a plain click (no prior
/// selection) does the target become the anchor.
pub fn select_to(sidebar: &mut Sidebar, target: &str) {
    let was_empty = sidebar.selection.is_empty();
    let next = selection_range(sidebar, target);
    let landed = !next.is_empty();
    sidebar.selection.selected = next;
    if was_empty && landed {
        sidebar.selection.last_selected = Some(target.to_string());
    }
}

pub fn clear_selection(sidebar: &mut Sidebar) {
    sidebar.selection.clear();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
