pub mod behavior;
pub mod config;
pub mod decorator;

mod registry;

use std::collections::BTreeMap;
use std::fmt;

pub use behavior::{Behavior, BehaviorKind};
pub use config::{FollowFlags, WindowConfig};
pub use registry::{WindowEvent, WindowRegistry};

use crate::error::WindowError;
use crate::layout::{Rect, Size};

/// Stable handle for a managed window. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u32);

impl WindowId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Live state of a window owned by the [`WindowRegistry`].
#[derive(Debug, Clone)]
pub struct ManagedWindow {
    id: WindowId,
    title: String,
    rect: Rect,
    min_size: Size,
    behaviors: BTreeMap<BehaviorKind, Behavior>,
    focused: bool,
    follow: FollowFlags,
}

impl ManagedWindow {
    fn new(id: WindowId, config: &WindowConfig) -> Self {
        Self {
            id,
            title: config.title.clone(),
            rect: config.rect,
            min_size: config.min_size,
            behaviors: BTreeMap::new(),
            focused: false,
            follow: config.follow,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn follow(&self) -> FollowFlags {
        self.follow
    }

    pub fn has(&self, kind: BehaviorKind) -> bool {
        self.behaviors.contains_key(&kind)
    }

    pub fn behavior(&self, kind: BehaviorKind) -> Option<&Behavior> {
        self.behaviors.get(&kind)
    }

    pub fn behavior_kinds(&self) -> impl Iterator<Item = BehaviorKind> + '_ {
        self.behaviors.keys().copied()
    }

    pub fn is_passable(&self) -> bool {
        self.has(BehaviorKind::Passable)
    }

    pub fn is_unblockable(&self) -> bool {
        self.has(BehaviorKind::Unblockable)
    }

    pub fn is_walkable(&self) -> bool {
        self.has(BehaviorKind::Walkable)
    }

    fn attach(&mut self, kind: BehaviorKind) -> Result<(), WindowError> {
        if self.behaviors.contains_key(&kind) {
            return Err(WindowError::DuplicateBehavior { id: self.id, kind });
        }
        self.behaviors.insert(kind, Behavior::new(kind));
        Ok(())
    }

    fn behavior_mut(&mut self, kind: BehaviorKind) -> Option<&mut Behavior> {
        self.behaviors.get_mut(&kind)
    }

    fn release_gestures(&mut self) {
        for behavior in self.behaviors.values_mut() {
            behavior.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_rejects_duplicates() {
        let config = WindowConfig::new("w", Rect::new(0, 0, 4, 4));
        let mut window = ManagedWindow::new(WindowId::new(1), &config);
        assert!(window.attach(BehaviorKind::Walkable).is_ok());
        assert_eq!(
            window.attach(BehaviorKind::Walkable),
            Err(WindowError::DuplicateBehavior {
                id: WindowId::new(1),
                kind: BehaviorKind::Walkable
            })
        );
        assert!(window.is_walkable());
        assert_eq!(window.behavior_kinds().count(), 1);
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId::new(12).to_string(), "#12");
    }
}
