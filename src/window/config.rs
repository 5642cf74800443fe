use std::str::FromStr;

use crate::constants::DEFAULT_MIN_SIZE;
use crate::error::WindowError;
use crate::layout::{Rect, Size};

use super::BehaviorKind;

/// Whether the player follows its anchor window when the window changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowFlags {
    pub movement: bool,
    pub resize: bool,
}

/// Creation-time template for a managed window.
///
/// Only `follow` survives as live state; everything else is copied into the
/// window when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub rect: Rect,
    pub min_size: Size,
    pub behaviors: Vec<BehaviorKind>,
    /// Behavior keys that did not name a known behavior. They are reported and
    /// skipped when the window is created.
    pub unknown_behaviors: Vec<String>,
    pub follow: FollowFlags,
    /// Marks the window the player starts a level in.
    pub start: bool,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, rect: Rect) -> Self {
        Self {
            title: title.into(),
            rect,
            min_size: DEFAULT_MIN_SIZE,
            behaviors: Vec::new(),
            unknown_behaviors: Vec::new(),
            follow: FollowFlags::default(),
            start: false,
        }
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_behavior(mut self, kind: BehaviorKind) -> Self {
        self.behaviors.push(kind);
        self
    }

    pub fn with_behaviors(mut self, kinds: &[BehaviorKind]) -> Self {
        self.behaviors.extend_from_slice(kinds);
        self
    }

    /// Adds a behavior by its textual key. Unknown keys are kept aside so the
    /// registry can report them without failing the whole window.
    pub fn with_behavior_key(mut self, key: &str) -> Self {
        match key.parse::<BehaviorKind>() {
            Ok(kind) => self.behaviors.push(kind),
            Err(_) => self.unknown_behaviors.push(key.trim().to_string()),
        }
        self
    }

    pub fn follow_movement(mut self, enabled: bool) -> Self {
        self.follow.movement = enabled;
        self
    }

    pub fn follow_resize(mut self, enabled: bool) -> Self {
        self.follow.resize = enabled;
        self
    }

    pub fn start_window(mut self) -> Self {
        self.start = true;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.title.trim().is_empty() {
            return Err(WindowError::Configuration(
                "window title is required".to_string(),
            ));
        }
        if self.rect.is_empty() {
            return Err(WindowError::Configuration(format!(
                "window `{}` has an empty rect {}",
                self.title, self.rect
            )));
        }
        let r = self.rect;
        if r.x.checked_add(r.width).is_none() || r.y.checked_add(r.height).is_none() {
            return Err(WindowError::Configuration(format!(
                "window `{}` extends past the coordinate range {}",
                self.title, self.rect
            )));
        }
        Ok(())
    }
}

/// Parses the compact template form `title@x,y,WxH[:key,key,...]`.
///
/// Keys are behavior names plus `follow-move`, `follow-resize`, `follow` (both)
/// and `start`.
impl FromStr for WindowConfig {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, keys) = match s.split_once(':') {
            Some((head, keys)) => (head, Some(keys)),
            None => (s, None),
        };
        let (title, geometry) = head.split_once('@').ok_or_else(|| {
            WindowError::Configuration(format!("`{s}` is missing the `@x,y,WxH` geometry"))
        })?;
        let rect = parse_geometry(geometry)?;
        let mut config = WindowConfig::new(title.trim(), rect);
        for key in keys.into_iter().flat_map(|keys| keys.split(',')) {
            let key = key.trim();
            match key {
                "" => {}
                "follow-move" => config.follow.movement = true,
                "follow-resize" => config.follow.resize = true,
                "follow" => {
                    config.follow.movement = true;
                    config.follow.resize = true;
                }
                "start" => config.start = true,
                other => config = config.with_behavior_key(other),
            }
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_geometry(geometry: &str) -> Result<Rect, WindowError> {
    let malformed =
        || WindowError::Configuration(format!("malformed geometry `{geometry}`, expected x,y,WxH"));
    let mut parts = geometry.split(',');
    let x = parts.next().ok_or_else(malformed)?;
    let y = parts.next().ok_or_else(malformed)?;
    let size = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    let (width, height) = size.split_once(['x', 'X']).ok_or_else(malformed)?;
    let number = |v: &str| v.trim().parse::<i32>().map_err(|_| malformed());
    Ok(Rect::new(
        number(x)?,
        number(y)?,
        number(width)?,
        number(height)?,
    ))
}
