//! Window placement and collision engine for a desktop platformer, with a
//! terminal host that plays it.
//!
//! The engine core is [`layout`] (rect algebra, passability and placement),
//! [`window`] (the registry that owns every window) and [`player`] (entity
//! motion against walkable regions). [`game`] strings them into levels.

pub mod actions;
pub mod cli;
pub mod constants;
pub mod debug_log;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod game;
pub mod host;
pub mod keybindings;
pub mod layout;
pub mod levels;
pub mod player;
pub mod runner;
pub mod state;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use error::{ErrorKind, WindowError};
pub use game::{GameEvent, GameSession};
pub use host::{HostSurface, NullHost, RecordingHost};
pub use layout::{Point, Rect, Size};
pub use levels::LevelConfig;
pub use player::{DirectionInput, PlayerController};
pub use window::{BehaviorKind, ManagedWindow, WindowConfig, WindowEvent, WindowId, WindowRegistry};
