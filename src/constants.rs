//! Shared crate-wide constants.

use std::time::Duration;

use crate::layout::Size;

/// Player speed in cells per second.
pub const DEFAULT_PLAYER_SPEED: f64 = 12.0;

/// Player footprint in cells. Terminal cells are roughly twice as tall as they
/// are wide, so a 2x1 entity reads as a square.
pub const DEFAULT_PLAYER_SIZE: Size<f64> = Size::new(2.0, 1.0);

/// Smallest size a resize gesture may shrink a window to. Leaves room for the
/// border, the header row and one interior row.
pub const DEFAULT_MIN_SIZE: Size = Size::new(8, 4);

/// Simulation tick for the terminal host.
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// How long a directional key counts as held after its last press or repeat
/// when the terminal does not report key releases.
///
/// Units: milliseconds. Must exceed the terminal's key-repeat delay or the
/// player stutters on the first repeat.
pub const DEFAULT_KEY_HOLD: Duration = Duration::from_millis(160);

/// Upper bound on the elapsed time a single tick may integrate, so a stalled
/// frame cannot teleport the player through a thin wall.
pub const MAX_TICK_ELAPSED: Duration = Duration::from_millis(100);
