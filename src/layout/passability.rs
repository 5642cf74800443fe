//! Which parts of the desktop block what.
//!
//! Two policies live here and are intentionally kept apart:
//!
//! - [`blocking_rects`] answers "where may this window not land?". Passable
//!   windows are transparent to each other, and Unblockable windows punch holes
//!   into whatever was collected before them.
//! - [`unwalkable_rects`] answers "where may the player not stand?". Walkable
//!   windows add area, every other window removes area, in registry order.

use super::Rect;
use super::region::{carve, subtract_all};
use crate::window::{ManagedWindow, WindowId};

/// Rects the window `target` must not overlap, in registry order.
///
/// With `target` set to `None` every non-Unblockable window contributes.
pub fn blocking_rects(windows: &[ManagedWindow], target: Option<WindowId>) -> Vec<Rect> {
    let target_passable = target
        .and_then(|id| windows.iter().find(|window| window.id() == id))
        .is_some_and(ManagedWindow::is_passable);
    let mut blocking = Vec::new();
    for window in windows {
        if Some(window.id()) == target {
            continue;
        }
        if window.is_unblockable() {
            blocking = carve(blocking, window.rect());
            continue;
        }
        if target_passable && window.is_passable() {
            continue;
        }
        blocking.push(window.rect());
    }
    tracing::trace!(
        target_window = ?target,
        count = blocking.len(),
        "collected blocking rects"
    );
    blocking
}

/// Parts of `boundary` the player may not occupy.
pub fn unwalkable_rects(windows: &[ManagedWindow], boundary: Rect) -> Vec<Rect> {
    let mut walkable = Vec::new();
    for window in windows {
        if window.is_walkable() {
            walkable.push(window.rect());
            continue;
        }
        walkable = carve(walkable, window.rect());
    }
    subtract_all(boundary, &walkable)
}
