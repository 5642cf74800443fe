//! Error types for window management and placement.
//!
//! Every failure is local: callers get a `Result`, the offending item is
//! skipped, and nothing escalates into a panic.

use thiserror::Error;

use crate::layout::ResizeEdge;
use crate::window::{BehaviorKind, WindowId};

/// Broad classification of a [`WindowError`], used to decide how loudly a
/// failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A template or a required field is missing or malformed.
    Configuration,
    /// A valid call made at the wrong time or against a stale handle.
    ProtocolMisuse,
    /// Input the engine deliberately does not handle.
    UnsupportedInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("window {0} is not managed")]
    UnknownWindow(WindowId),
    #[error("behavior {kind} is already attached to window {id}")]
    DuplicateBehavior { id: WindowId, kind: BehaviorKind },
    #[error("no drag gesture is in progress")]
    NoActiveDrag,
    #[error("unsupported resize edge {0:?}")]
    UnsupportedEdge(ResizeEdge),
    #[error("unknown behavior `{0}`")]
    UnknownBehavior(String),
}

impl WindowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WindowError::Configuration(_) => ErrorKind::Configuration,
            WindowError::UnknownWindow(_)
            | WindowError::DuplicateBehavior { .. }
            | WindowError::NoActiveDrag => ErrorKind::ProtocolMisuse,
            WindowError::UnsupportedEdge(_) | WindowError::UnknownBehavior(_) => {
                ErrorKind::UnsupportedInput
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_classified() {
        assert_eq!(
            WindowError::Configuration("x".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            WindowError::UnknownWindow(WindowId::new(3)).kind(),
            ErrorKind::ProtocolMisuse
        );
        assert_eq!(
            WindowError::UnsupportedEdge(ResizeEdge::TopLeft).kind(),
            ErrorKind::UnsupportedInput
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = WindowError::DuplicateBehavior {
            id: WindowId::new(7),
            kind: BehaviorKind::Passable,
        };
        assert_eq!(
            err.to_string(),
            "behavior passable is already attached to window #7"
        );
        assert_eq!(
            WindowError::UnknownBehavior("sticky".into()).to_string(),
            "unknown behavior `sticky`"
        );
    }
}
