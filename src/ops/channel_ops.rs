use crate::model::category::CategorySorting;
use crate::model::channel::Channel;
use crate::model::sidebar::Sidebar;
use crate::ops::category_ops::flattened_display_order;
use crate::util::sequence::{
    insert_multiple_without_duplicates, insert_without_duplicates, remove_item,
};

/// Error type for channel operations
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("channel not found: {0}")]
    NotFound(String),
    #[error("channel already registered: {0}")]
    AlreadyExists(String),
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}

// ---------------------------------------------------------------------------
// Insertion-index computation
// ---------------------------------------------------------------------------

/// Translate a drop position counted among *visible* channels into an index
/// into the canonical sequence, which still holds archived channels.
///
/// `channel_ids` is one category's canonical sequence; it may or may not
/// already contain `moving_id` (a drag within the category vs. a channel
/// being placed for the first time). `visible_target` is the slot the
/// channel should land in, counted in the visible projection with
/// `moving_id` taken out. The returned index is meant to be applied with
/// [`insert_without_duplicates`], which removes `moving_id` before
/// inserting; both sides count positions in the same reduced sequence.
///
/// The computed index always falls immediately after the visible channel
/// preceding the target slot, never inside a run of archived channels, so
/// archived channels stay attached to the visible channel that follows
/// them. A `visible_target` at or past the end of the visible projection
/// appends after everything, trailing archived channels included.
pub fn insertion_index(
    channel_ids: &[String],
    is_hidden: impl Fn(&str) -> bool,
    visible_target: usize,
    moving_id: &str,
) -> usize {
    if visible_target == 0 {
        return 0;
    }

    let working: Vec<&str> = channel_ids
        .iter()
        .map(String::as_str)
        .filter(|id| *id != moving_id)
        .collect();

    // The tail slot appends after the whole canonical sequence, trailing
    // archived channels included, so it cannot be found by walking to the
    // last visible channel
    let visible_count = working.iter().filter(|id| !is_hidden(id)).count();
    if visible_target >= visible_count {
        return working.len();
    }

    let mut seen_visible = 0;
    for (index, id) in working.iter().enumerate() {
        if !is_hidden(id) {
            seen_visible += 1;
            if seen_visible == visible_target {
                return index + 1;
            }
        }
    }
    working.len()
}

/// Multi-drag variant of [`insertion_index`]: the channels in `moving_ids`
/// travel together (a multi-selection drag), with `draggable_id` the one
/// under the pointer. None of them may count toward positions, so they are
/// all struck from the sequence before the computation.
pub fn insertion_index_excluding(
    channel_ids: &[String],
    is_hidden: impl Fn(&str) -> bool,
    visible_target: usize,
    draggable_id: &str,
    moving_ids: &[String],
) -> usize {
    let working: Vec<String> = channel_ids
        .iter()
        .filter(|id| !moving_ids.contains(id))
        .cloned()
        .collect();
    insertion_index(&working, is_hidden, visible_target, draggable_id)
}

// ---------------------------------------------------------------------------
// Channel moves
// ---------------------------------------------------------------------------

/// Reorder (or place) a single channel inside a category, dropping it at
/// `visible_target` counted among the category's visible channels.
pub fn move_channel(
    sidebar: &mut Sidebar,
    category_id: &str,
    channel_id: &str,
    visible_target: usize,
) -> Result<(), ChannelError> {
    if !sidebar.channels.contains_key(channel_id) {
        return Err(ChannelError::NotFound(channel_id.to_string()));
    }
    let category = sidebar
        .category(category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(category_id.to_string()))?;

    let index = insertion_index(
        &category.channel_ids,
        |id| sidebar.is_hidden(id),
        visible_target,
        channel_id,
    );

    let category = sidebar
        .category_mut(category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(category_id.to_string()))?;
    insert_without_duplicates(&mut category.channel_ids, channel_id.to_string(), index);
    Ok(())
}

/// Drop a dragged group of channels into a category at `visible_target`.
///
/// `draggable_id` is the channel under the pointer; the rest of
/// `channel_ids` travel with it. The group lands as one block in its
/// current display order (not click order), every moved id is struck from
/// the category that held it, and the target category switches to manual
/// ordering.
pub fn move_channels_to_category(
    sidebar: &mut Sidebar,
    target_category_id: &str,
    channel_ids: &[String],
    visible_target: usize,
    draggable_id: &str,
) -> Result<(), ChannelError> {
    for id in channel_ids {
        if !sidebar.channels.contains_key(id.as_str()) {
            return Err(ChannelError::NotFound(id.clone()));
        }
    }
    let target = sidebar
        .category(target_category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(target_category_id.to_string()))?;

    let index = insertion_index_excluding(
        &target.channel_ids,
        |id| sidebar.is_hidden(id),
        visible_target,
        draggable_id,
        channel_ids,
    );
    let block = display_ordered(sidebar, channel_ids);

    for category in &mut sidebar.categories {
        if category.id != target_category_id {
            for id in &block {
                remove_item(&mut category.channel_ids, id);
            }
        }
    }
    let target = sidebar
        .category_mut(target_category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(target_category_id.to_string()))?;
    insert_multiple_without_duplicates(&mut target.channel_ids, &block, index);
    target.sorting = CategorySorting::Manual;
    Ok(())
}

/// Order a set of channel ids by their current position in the flattened
/// display order. Ids that are not displayed anywhere keep their given
/// order, after the displayed ones.
fn display_ordered(sidebar: &Sidebar, channel_ids: &[String]) -> Vec<String> {
    let flattened = flattened_display_order(sidebar);
    let mut block: Vec<String> = Vec::with_capacity(channel_ids.len());
    for id in &flattened {
        if channel_ids.contains(id) {
            block.push(id.clone());
        }
    }
    for id in channel_ids {
        if !block.contains(id) {
            block.push(id.clone());
        }
    }
    block
}

// ---------------------------------------------------------------------------
// Channel lifecycle
// ---------------------------------------------------------------------------

/// Register a channel and place its id in a category. A `visible_target`
/// of `None` appends after everything in the category, the default spot
/// for a freshly joined channel.
pub fn add_channel(
    sidebar: &mut Sidebar,
    channel: Channel,
    category_id: &str,
    visible_target: Option<usize>,
) -> Result<(), ChannelError> {
    if sidebar.channels.contains_key(&channel.id) {
        return Err(ChannelError::AlreadyExists(channel.id));
    }
    let category = sidebar
        .category(category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(category_id.to_string()))?;

    let index = match visible_target {
        Some(target) => insertion_index(
            &category.channel_ids,
            |id| sidebar.is_hidden(id),
            target,
            &channel.id,
        ),
        None => category.channel_ids.len(),
    };

    let channel_id = channel.id.clone();
    sidebar.channels.insert(channel_id.clone(), channel);
    let category = sidebar
        .category_mut(category_id)
        .ok_or_else(|| ChannelError::CategoryNotFound(category_id.to_string()))?;
    insert_without_duplicates(&mut category.channel_ids, channel_id, index);
    Ok(())
}

/// Archive a channel at the given timestamp (epoch millis, nonzero). The
/// channel disappears from visible projections and from the selection but
/// keeps its slot in the canonical sequence.
pub fn archive_channel(
    sidebar: &mut Sidebar,
    channel_id: &str,
    delete_at: i64,
) -> Result<(), ChannelError> {
    let channel = sidebar
        .channel_mut(channel_id)
        .ok_or_else(|| ChannelError::NotFound(channel_id.to_string()))?;
    // Zero would mean "live" again
    channel.delete_at = delete_at.max(1);

    sidebar.selection.selected.retain(|id| id != channel_id);
    if sidebar.selection.last_selected.as_deref() == Some(channel_id) {
        sidebar.selection.last_selected = None;
    }
    Ok(())
}

/// Restore an archived channel; it reappears at its canonical position.
pub fn unarchive_channel(sidebar: &mut Sidebar, channel_id: &str) -> Result<(), ChannelError> {
    let channel = sidebar
        .channel_mut(channel_id)
        .ok_or_else(|| ChannelError::NotFound(channel_id.to_string()))?;
    channel.delete_at = 0;
    Ok(())
}

/// Drop a channel from the table, every canonical sequence, and the
/// selection. The hard-removal path (leaving a channel), as opposed to
/// [`archive_channel`].
pub fn remove_channel(sidebar: &mut Sidebar, channel_id: &str) -> Result<(), ChannelError> {
    if sidebar.channels.shift_remove(channel_id).is_none() {
        return Err(ChannelError::NotFound(channel_id.to_string()));
    }
    for category in &mut sidebar.categories {
        remove_item(&mut category.channel_ids, channel_id);
    }
    sidebar.selection.selected.retain(|id| id != channel_id);
    if sidebar.selection.last_selected.as_deref() == Some(channel_id) {
        sidebar.selection.last_selected = None;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
