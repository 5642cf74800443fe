//! Level templates and the built-in level set.

use crate::constants::DEFAULT_PLAYER_SIZE;
use crate::layout::{Rect, Size};
use crate::window::{BehaviorKind, WindowConfig};

/// Play field of the built-in levels, in cells.
pub const BOARD: Rect = Rect {
    x: 0,
    y: 0,
    width: 96,
    height: 32,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub number: u32,
    /// Area outside every walkable window is solid; nothing walks past it.
    pub boundary: Rect,
    pub player_size: Size<f64>,
    pub goal: Rect,
    pub windows: Vec<WindowConfig>,
}

impl LevelConfig {
    pub fn new(number: u32, boundary: Rect, goal: Rect) -> Self {
        Self {
            number,
            boundary,
            player_size: DEFAULT_PLAYER_SIZE,
            goal,
            windows: Vec::new(),
        }
    }

    pub fn with_player_size(mut self, size: Size<f64>) -> Self {
        self.player_size = size;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.windows.push(window);
        self
    }

    pub fn start_windows(&self) -> usize {
        self.windows.iter().filter(|window| window.start).count()
    }
}

/// The levels shipped with the game, in play order.
pub fn builtin() -> Vec<LevelConfig> {
    vec![bridge(), glass(), portal()]
}

/// Drag a floor across the gap.
fn bridge() -> LevelConfig {
    use BehaviorKind::*;
    LevelConfig::new(1, BOARD, Rect::new(82, 15, 4, 2))
        .with_window(
            WindowConfig::new("Home", Rect::new(4, 8, 24, 14))
                .with_behaviors(&[Walkable, Resizable])
                .follow_resize(true)
                .start_window(),
        )
        .with_window(
            WindowConfig::new("Plank", Rect::new(34, 24, 24, 6))
                .with_behaviors(&[Walkable, Movable])
                .follow_movement(true),
        )
        .with_window(
            WindowConfig::new("Exit", Rect::new(68, 8, 24, 14)).with_behaviors(&[Walkable]),
        )
}

/// A solid pane splits the board; only a passable floor may overlap it.
fn glass() -> LevelConfig {
    use BehaviorKind::*;
    LevelConfig::new(2, BOARD, Rect::new(84, 6, 4, 2))
        .with_window(
            WindowConfig::new("Start", Rect::new(2, 2, 30, 12))
                .with_behaviors(&[Walkable, Movable])
                .follow_movement(true)
                .start_window(),
        )
        .with_window(
            WindowConfig::new("Pane", Rect::new(40, 0, 10, 32))
                .with_behaviors(&[Passable, WindowInfo]),
        )
        .with_window(
            WindowConfig::new("Glass", Rect::new(20, 18, 24, 8))
                .with_behaviors(&[Walkable, Passable, Movable, Resizable])
                .follow_movement(true),
        )
        .with_window(
            WindowConfig::new("Goal", Rect::new(60, 2, 32, 12))
                .with_behaviors(&[Walkable, Movable])
                .with_min_size(Size::new(10, 5)),
        )
}

/// A window that ignores collisions carries the player through a wall.
fn portal() -> LevelConfig {
    use BehaviorKind::*;
    LevelConfig::new(3, BOARD, Rect::new(86, 24, 4, 2))
        .with_window(
            WindowConfig::new("Camp", Rect::new(2, 18, 26, 12))
                .with_behaviors(&[Walkable, Movable, Resizable])
                .follow_movement(true)
                .follow_resize(true)
                .start_window(),
        )
        .with_window(WindowConfig::new("Wall", Rect::new(44, 0, 8, 32)))
        .with_window(
            WindowConfig::new("Portal", Rect::new(10, 2, 20, 8))
                .with_behaviors(&[Walkable, Unblockable, Movable, WindowInfo])
                .follow_movement(true),
        )
        .with_window(
            WindowConfig::new("Summit", Rect::new(60, 16, 32, 14)).with_behaviors(&[Walkable]),
        )
}
