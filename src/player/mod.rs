//! The player entity and how it moves through walkable space.

mod input;

pub use input::DirectionInput;

use std::time::Duration;

use crate::layout::{Point, Rect, Scalar, Size, intersects, mtv_offset, unwalkable_rects};
use crate::window::{ManagedWindow, WindowEvent, WindowId};

/// Continuous footprint of the player plus the window it is standing in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerEntity {
    pub rect: Rect<f64>,
    pub anchor: Option<WindowId>,
}

#[derive(Debug, Clone)]
pub struct PlayerController {
    entity: PlayerEntity,
    /// Cells per second.
    speed: f64,
}

impl PlayerController {
    pub fn new(speed: f64, size: Size<f64>) -> Self {
        Self {
            entity: PlayerEntity {
                rect: Rect::from_parts(Point::zero(), size),
                anchor: None,
            },
            speed,
        }
    }

    pub fn entity(&self) -> &PlayerEntity {
        &self.entity
    }

    pub fn rect(&self) -> Rect<f64> {
        self.entity.rect
    }

    pub fn anchor(&self) -> Option<WindowId> {
        self.entity.anchor
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_anchor(&mut self, anchor: Option<WindowId>) {
        if self.entity.anchor != anchor {
            tracing::debug!(from = ?self.entity.anchor, to = ?anchor, "player anchor changed");
            self.entity.anchor = anchor;
        }
    }

    /// Centers the player in `window` with the given size and anchors it there.
    pub fn reset(&mut self, window: &ManagedWindow, size: Size<f64>) {
        self.center_in(window.rect(), size);
        self.set_anchor(Some(window.id()));
    }

    /// Centers the player in `area` without anchoring it.
    pub fn center_in(&mut self, area: Rect, size: Size<f64>) {
        let center = area.to_f64().center();
        let origin = Point::new(center.x - size.width.half(), center.y - size.height.half());
        self.entity.rect = Rect::from_parts(origin, size);
    }

    /// Advances the player along `input` for `elapsed`. Returns whether the
    /// player moved.
    pub fn step(
        &mut self,
        input: DirectionInput,
        elapsed: Duration,
        windows: &[ManagedWindow],
        boundary: Rect,
    ) -> bool {
        let direction = input.vector();
        if direction == Point::zero() {
            return false;
        }
        let distance = self.speed * elapsed.as_secs_f64();
        let delta = Point::new(direction.x * distance, direction.y * distance);
        let before = self.entity.rect;
        self.resolve_move(before.translate(delta), windows, boundary);
        self.entity.rect != before
    }

    /// Moves the player's origin to `position`, pushed out of unwalkable space.
    pub fn move_to(&mut self, position: Point<f64>, windows: &[ManagedWindow], boundary: Rect) {
        let target = self.entity.rect.with_position(position);
        self.resolve_move(target, windows, boundary);
    }

    fn resolve_move(&mut self, target: Rect<f64>, windows: &[ManagedWindow], boundary: Rect) {
        let mut rect = target;
        let blocked = unwalkable_rects(windows, boundary);
        tracing::trace!(fragments = blocked.len(), "unwalkable region");
        for region in blocked {
            let region = region.to_f64();
            if intersects(rect, region) {
                rect = rect.translate(mtv_offset(rect, region));
            }
        }
        self.entity.rect = rect;
    }

    /// Reacts to a registry notification: follows the anchor window when it
    /// moves or resizes, and picks up or drops anchors.
    pub fn on_window_event(&mut self, event: &WindowEvent, windows: &[ManagedWindow], boundary: Rect) {
        match *event {
            WindowEvent::Moved { id, before, after } if self.entity.anchor == Some(id) => {
                let follows = windows
                    .iter()
                    .find(|window| window.id() == id)
                    .is_some_and(|window| window.follow().movement);
                if !follows {
                    return;
                }
                let delta = before.position().delta_to(after.position());
                let delta = Point::new(f64::from(delta.x), f64::from(delta.y));
                let target = self.entity.rect.translate(delta);
                self.resolve_move(target, windows, boundary);
            }
            WindowEvent::Resized { id, before, after } if self.entity.anchor == Some(id) => {
                let follows = windows
                    .iter()
                    .find(|window| window.id() == id)
                    .is_some_and(|window| window.follow().resize);
                if !follows {
                    return;
                }
                let target = scale_about_centers(self.entity.rect, before, after);
                self.resolve_move(target, windows, boundary);
            }
            WindowEvent::Closed(id) if self.entity.anchor == Some(id) => {
                self.set_anchor(None);
            }
            WindowEvent::Focused(id) => {
                let overlaps_walkable = windows
                    .iter()
                    .find(|window| window.id() == id)
                    .is_some_and(|window| {
                        window.is_walkable() && intersects(window.rect().to_f64(), self.entity.rect)
                    });
                if overlaps_walkable {
                    self.set_anchor(Some(id));
                }
            }
            _ => {}
        }
    }

    /// Drops the anchor once the player no longer overlaps it.
    pub fn refresh_anchor(&mut self, windows: &[ManagedWindow]) {
        let Some(anchor) = self.entity.anchor else {
            return;
        };
        let still_inside = windows
            .iter()
            .find(|window| window.id() == anchor)
            .is_some_and(|window| intersects(window.rect().to_f64(), self.entity.rect));
        if !still_inside {
            self.set_anchor(None);
        }
    }
}

/// Maps `entity` from `before` into `after`, scaling its offset from the
/// window center and its size by the per-axis size ratio.
fn scale_about_centers(entity: Rect<f64>, before: Rect, after: Rect) -> Rect<f64> {
    let ratio = |old: i32, new: i32| {
        if old == 0 {
            1.0
        } else {
            f64::from(new) / f64::from(old)
        }
    };
    let scale_x = ratio(before.width, after.width);
    let scale_y = ratio(before.height, after.height);
    let old_center = before.to_f64().center();
    let new_center = after.to_f64().center();
    let center = entity.center();
    let width = entity.width * scale_x;
    let height = entity.height * scale_y;
    let x = new_center.x + (center.x - old_center.x) * scale_x - width / 2.0;
    let y = new_center.y + (center.y - old_center.y) * scale_y - height / 2.0;
    Rect::new(x, y, width, height)
}
