//! Local question ordering
//!
//! Positional move up/down over the in-memory question list. The backend has
//! no reorder endpoint, so this ordering is cosmetic for the current session
//! and is never written back.

/// Swap the item at `index` with its predecessor. Returns false at the top.
pub fn move_up<T>(items: &mut [T], index: usize) -> bool {
    if index == 0 || index >= items.len() {
        return false;
    }
    items.swap(index - 1, index);
    true
}

/// Swap the item at `index` with its successor. Returns false at the bottom.
pub fn move_down<T>(items: &mut [T], index: usize) -> bool {
    if index + 1 >= items.len() {
        return false;
    }
    items.swap(index, index + 1);
    true
}
