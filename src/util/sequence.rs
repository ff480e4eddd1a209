//! Canonical-sequence mutation primitives.
//!
//! Every reorder applier funnels through these: an index computed against a
//! sequence *without* the moving ids is applied by removing those ids first
//! and splicing them back in, so the two sides always agree on coordinates.

/// Remove any existing occurrence of `item`, then insert it at `index`.
/// The index is counted in the sequence *after* removal and clamped to its
/// end, so out-of-range means append.
pub fn insert_without_duplicates(items: &mut Vec<String>, item: String, index: usize) {
    items.retain(|existing| *existing != item);
    let index = index.min(items.len());
    items.insert(index, item);
}

/// Block insert: remove any existing occurrence of the `new_items`, then
/// splice them in at `index` (clamped), preserving their given order.
pub fn insert_multiple_without_duplicates(
    items: &mut Vec<String>,
    new_items: &[String],
    index: usize,
) {
    items.retain(|existing| !new_items.contains(existing));
    let index = index.min(items.len());
    items.splice(index..index, new_items.iter().cloned());
}

/// Remove `item` if present; no-op otherwise.
pub fn remove_item(items: &mut Vec<String>, item: &str) {
    items.retain(|existing| existing != item);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
