use std::fmt;

use crate::drivers::keyboard::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    // Player movement, held
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    // Window stack
    FocusNext,
    CloseWindow,
    // Session
    Restart,
    ToggleHelp,
    ToggleDebugLog,
    Quit,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::FocusNext,
        Action::CloseWindow,
        Action::Restart,
        Action::ToggleHelp,
        Action::ToggleDebugLog,
        Action::Quit,
    ];

    /// The held direction for movement actions.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            Action::MoveLeft => Some(Direction::Left),
            Action::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::FocusNext => "Raise next window",
            Action::CloseWindow => "Close focused window",
            Action::Restart => "Restart level",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleDebugLog => "Toggle debug log",
            Action::Quit => "Quit",
        };
        write!(f, "{}", s)
    }
}
