use std::fmt;
use std::str::FromStr;

use crate::error::WindowError;
use crate::layout::floating::{MoveDrag, ResizeDrag};

/// Capabilities a window can carry. A window holds at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BehaviorKind {
    Movable,
    Resizable,
    Passable,
    Unblockable,
    Walkable,
    WindowInfo,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 6] = [
        BehaviorKind::Movable,
        BehaviorKind::Resizable,
        BehaviorKind::Passable,
        BehaviorKind::Unblockable,
        BehaviorKind::Walkable,
        BehaviorKind::WindowInfo,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BehaviorKind::Movable => "movable",
            BehaviorKind::Resizable => "resizable",
            BehaviorKind::Passable => "passable",
            BehaviorKind::Unblockable => "unblockable",
            BehaviorKind::Walkable => "walkable",
            BehaviorKind::WindowInfo => "info",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BehaviorKind {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "movable" => Ok(BehaviorKind::Movable),
            "resizable" => Ok(BehaviorKind::Resizable),
            "passable" => Ok(BehaviorKind::Passable),
            "unblockable" => Ok(BehaviorKind::Unblockable),
            "walkable" => Ok(BehaviorKind::Walkable),
            "info" | "windowinfo" | "window-info" => Ok(BehaviorKind::WindowInfo),
            _ => Err(WindowError::UnknownBehavior(s.trim().to_string())),
        }
    }
}

/// A behavior attached to a window, with the private state it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Movable { drag: Option<MoveDrag> },
    Resizable { drag: Option<ResizeDrag> },
    Passable,
    Unblockable,
    Walkable,
    WindowInfo,
}

impl Behavior {
    pub fn new(kind: BehaviorKind) -> Self {
        match kind {
            BehaviorKind::Movable => Behavior::Movable { drag: None },
            BehaviorKind::Resizable => Behavior::Resizable { drag: None },
            BehaviorKind::Passable => Behavior::Passable,
            BehaviorKind::Unblockable => Behavior::Unblockable,
            BehaviorKind::Walkable => Behavior::Walkable,
            BehaviorKind::WindowInfo => Behavior::WindowInfo,
        }
    }

    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Movable { .. } => BehaviorKind::Movable,
            Behavior::Resizable { .. } => BehaviorKind::Resizable,
            Behavior::Passable => BehaviorKind::Passable,
            Behavior::Unblockable => BehaviorKind::Unblockable,
            Behavior::Walkable => BehaviorKind::Walkable,
            Behavior::WindowInfo => BehaviorKind::WindowInfo,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Behavior::Movable { drag: Some(_) } | Behavior::Resizable { drag: Some(_) }
        )
    }

    /// Drops any in-progress gesture state.
    pub(crate) fn release(&mut self) {
        match self {
            Behavior::Movable { drag } => *drag = None,
            Behavior::Resizable { drag } => *drag = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for kind in BehaviorKind::ALL {
            assert_eq!(kind.key().parse::<BehaviorKind>(), Ok(kind));
        }
        assert_eq!(" Walkable ".parse(), Ok(BehaviorKind::Walkable));
    }

    #[test]
    fn unknown_key_is_reported() {
        let err = "sticky".parse::<BehaviorKind>().unwrap_err();
        assert_eq!(err, WindowError::UnknownBehavior("sticky".into()));
    }

    #[test]
    fn new_behavior_has_no_gesture() {
        let movable = Behavior::new(BehaviorKind::Movable);
        assert_eq!(movable.kind(), BehaviorKind::Movable);
        assert!(!movable.is_dragging());
    }
}
