use super::{Behavior, BehaviorKind, ManagedWindow, WindowConfig, WindowId};
use crate::error::WindowError;
use crate::host::{HostSurface, NullHost};
use crate::layout::floating::{MoveDrag, ResizeDrag, apply_move_drag, apply_resize_drag};
use crate::layout::{
    Point, Rect, ResizeEdge, blocking_rects, residual_overlaps, resolve_placement,
};

/// Change notifications queued by the registry, drained with
/// [`WindowRegistry::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Created(WindowId),
    /// Position changed, size kept. `before` is the rect prior to the call.
    Moved {
        id: WindowId,
        before: Rect,
        after: Rect,
    },
    Resized {
        id: WindowId,
        before: Rect,
        after: Rect,
    },
    Focused(WindowId),
    Closed(WindowId),
}

impl WindowEvent {
    pub fn id(&self) -> WindowId {
        match *self {
            WindowEvent::Created(id)
            | WindowEvent::Focused(id)
            | WindowEvent::Closed(id)
            | WindowEvent::Moved { id, .. }
            | WindowEvent::Resized { id, .. } => id,
        }
    }
}

/// Owner of every managed window.
///
/// `windows` doubles as the focus order: the last entry is the most recently
/// focused window and is drawn on top. All geometry changes go through
/// [`WindowRegistry::set_rect`].
#[derive(Debug)]
pub struct WindowRegistry<H: HostSurface = NullHost> {
    windows: Vec<ManagedWindow>,
    host: H,
    // drained by the caller once per tick
    events: Vec<WindowEvent>,
    active_drag: Option<WindowId>,
    next_window_seq: u32,
}

impl Default for WindowRegistry<NullHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry<NullHost> {
    pub fn new() -> Self {
        Self::with_host(NullHost)
    }
}

impl<H: HostSurface> WindowRegistry<H> {
    pub fn with_host(host: H) -> Self {
        Self {
            windows: Vec::new(),
            host,
            events: Vec::new(),
            active_drag: None,
            next_window_seq: 1,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Windows in focus order, bottom first.
    pub fn windows(&self) -> &[ManagedWindow] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&ManagedWindow> {
        self.windows.iter().find(|window| window.id == id)
    }

    pub fn order(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.iter().map(|window| window.id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|window| window.focused)
            .map(|window| window.id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active_drag(&self) -> Option<WindowId> {
        self.active_drag
    }

    /// Topmost window containing `point`.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|window| window.rect.contains(point))
            .map(|window| window.id)
    }

    fn index_of(&self, id: WindowId) -> Result<usize, WindowError> {
        self.windows
            .iter()
            .position(|window| window.id == id)
            .ok_or(WindowError::UnknownWindow(id))
    }

    pub fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId, WindowError> {
        config.validate()?;
        let id = WindowId::new(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);

        let mut window = ManagedWindow::new(id, config);
        for kind in &config.behaviors {
            if let Err(err) = window.attach(*kind) {
                tracing::warn!(window_id = ?id, error = %err, "skipping behavior");
            }
        }
        for key in &config.unknown_behaviors {
            let err = WindowError::UnknownBehavior(key.clone());
            tracing::warn!(window_id = ?id, error = %err, "skipping behavior");
        }

        self.host.create_host_window(id, config);
        tracing::debug!(
            window_id = ?id,
            title = %config.title,
            rect = %config.rect,
            "created window"
        );
        self.windows.push(window);
        self.events.push(WindowEvent::Created(id));
        Ok(id)
    }

    /// Moves or resizes a window, resolving collisions first.
    ///
    /// `edge` selects resize mode. Returns the committed rect. Proposing the
    /// current rect changes nothing and queues no event.
    pub fn set_rect(
        &mut self,
        id: WindowId,
        proposed: Rect,
        edge: Option<ResizeEdge>,
    ) -> Result<Rect, WindowError> {
        let index = self.index_of(id).inspect_err(|err| {
            tracing::warn!(error = %err, "set_rect ignored");
        })?;
        let current = self.windows[index].rect;
        if proposed == current {
            return Ok(current);
        }
        if self.windows[index].is_unblockable() {
            self.commit(index, proposed);
            return Ok(proposed);
        }

        let blocking = blocking_rects(&self.windows, Some(id));
        let resolved = resolve_placement(proposed, edge, &blocking).inspect_err(|err| {
            tracing::warn!(window_id = ?id, error = %err, "placement rejected");
        })?;
        let residual = residual_overlaps(resolved, &blocking);
        if residual > 0 {
            tracing::warn!(
                window_id = ?id,
                rect = %resolved,
                residual,
                "placement left overlaps after a single pass"
            );
        }
        self.commit(index, resolved);
        Ok(resolved)
    }

    fn commit(&mut self, index: usize, after: Rect) {
        let window = &mut self.windows[index];
        let before = window.rect;
        if before == after {
            return;
        }
        window.rect = after;
        let id = window.id;
        self.host.set_host_geometry(id, after);
        let event = if before.size() == after.size() {
            WindowEvent::Moved { id, before, after }
        } else {
            WindowEvent::Resized { id, before, after }
        };
        tracing::trace!(window_id = ?id, before = %before, after = %after, "committed rect");
        self.events.push(event);
    }

    /// Raises `id` to the top of the focus order and marks it focused.
    pub fn on_focused(&mut self, id: WindowId) -> Result<(), WindowError> {
        let index = self.index_of(id).inspect_err(|err| {
            tracing::warn!(error = %err, "focus ignored");
        })?;
        let mut window = self.windows.remove(index);
        window.focused = true;
        for other in &mut self.windows {
            other.focused = false;
        }
        self.windows.push(window);
        tracing::debug!(window_id = ?id, "focused window");
        self.events.push(WindowEvent::Focused(id));
        Ok(())
    }

    /// Focuses the bottom-most window, cycling through the whole stack.
    pub fn focus_next(&mut self) -> Option<WindowId> {
        let id = self.windows.first()?.id;
        self.on_focused(id).ok()?;
        Some(id)
    }

    /// Removes the window and tears down its host window.
    pub fn on_close_requested(&mut self, id: WindowId) -> Result<ManagedWindow, WindowError> {
        let index = self.index_of(id).inspect_err(|err| {
            tracing::warn!(error = %err, "close ignored");
        })?;
        let window = self.windows.remove(index);
        if self.active_drag == Some(id) {
            self.active_drag = None;
        }
        self.host.destroy_host_window(id);
        tracing::debug!(window_id = ?id, "closed window");
        self.events.push(WindowEvent::Closed(id));
        Ok(window)
    }

    /// Closes every window.
    pub fn clear(&mut self) {
        let ids: Vec<WindowId> = self.order().collect();
        for id in ids {
            let _ = self.on_close_requested(id);
        }
        self.active_drag = None;
    }

    pub fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    /// Starts a move gesture. Returns `Ok(false)` when the window is not
    /// Movable.
    pub fn begin_move(&mut self, id: WindowId, pointer: Point) -> Result<bool, WindowError> {
        let index = self.index_of(id)?;
        self.end_drag();
        let window = &mut self.windows[index];
        let initial = window.rect.position();
        let Some(Behavior::Movable { drag }) = window.behavior_mut(BehaviorKind::Movable) else {
            return Ok(false);
        };
        *drag = Some(MoveDrag {
            initial,
            start: pointer,
        });
        self.active_drag = Some(id);
        tracing::trace!(window_id = ?id, "move gesture started");
        Ok(true)
    }

    /// Starts a resize gesture on one edge. Returns `Ok(false)` when the window
    /// is not Resizable.
    pub fn begin_resize(
        &mut self,
        id: WindowId,
        edge: ResizeEdge,
        pointer: Point,
    ) -> Result<bool, WindowError> {
        if edge.is_diagonal() {
            let err = WindowError::UnsupportedEdge(edge);
            tracing::warn!(window_id = ?id, error = %err, "resize gesture rejected");
            return Err(err);
        }
        let index = self.index_of(id)?;
        self.end_drag();
        let window = &mut self.windows[index];
        let start_rect = window.rect;
        let Some(Behavior::Resizable { drag }) = window.behavior_mut(BehaviorKind::Resizable)
        else {
            return Ok(false);
        };
        *drag = Some(ResizeDrag {
            edge,
            start_rect,
            start: pointer,
        });
        self.active_drag = Some(id);
        tracing::trace!(window_id = ?id, ?edge, "resize gesture started");
        Ok(true)
    }

    /// Feeds the pointer position to the active gesture and commits the
    /// resolved rect.
    pub fn drag_to(&mut self, pointer: Point) -> Result<Option<Rect>, WindowError> {
        let id = self.active_drag.ok_or(WindowError::NoActiveDrag)?;
        let index = match self.index_of(id) {
            Ok(index) => index,
            Err(err) => {
                self.active_drag = None;
                return Err(err);
            }
        };
        let window = &self.windows[index];
        let proposal = match (
            window.behavior(BehaviorKind::Movable),
            window.behavior(BehaviorKind::Resizable),
        ) {
            (Some(Behavior::Movable { drag: Some(drag) }), _) => Some((
                window.rect.with_position(apply_move_drag(drag, pointer)),
                None,
            )),
            (_, Some(Behavior::Resizable { drag: Some(drag) })) => Some((
                apply_resize_drag(drag, pointer, window.min_size),
                Some(drag.edge),
            )),
            _ => None,
        };
        let Some((proposed, edge)) = proposal else {
            self.active_drag = None;
            return Err(WindowError::NoActiveDrag);
        };
        self.set_rect(id, proposed, edge).map(Some)
    }

    /// Releases the active gesture, if any. No rollback happens.
    pub fn end_drag(&mut self) -> Option<WindowId> {
        let id = self.active_drag.take()?;
        if let Ok(index) = self.index_of(id) {
            self.windows[index].release_gestures();
        }
        Some(id)
    }
}
