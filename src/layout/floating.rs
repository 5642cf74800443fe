//! Pointer gestures on floating windows: hit regions and drag arithmetic.
//!
//! Everything here works on proposed rects only. Collision is applied later by
//! the placement resolver.

use super::{Point, Rect, ResizeEdge, Size};
use crate::window::WindowId;

/// Pointer-down state for a move gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDrag {
    /// Window origin when the gesture started.
    pub initial: Point,
    /// Pointer position when the gesture started.
    pub start: Point,
}

/// Pointer-down state for a resize gesture on one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDrag {
    pub edge: ResizeEdge,
    pub start_rect: Rect,
    pub start: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeHandle {
    pub id: WindowId,
    pub rect: Rect,
    pub edge: ResizeEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragHandle {
    pub id: WindowId,
    pub rect: Rect,
}

/// One-cell strips along the four sides, corners excluded.
pub fn resize_handles(id: WindowId, rect: Rect) -> Vec<ResizeHandle> {
    let mut handles = Vec::new();
    if rect.width < 3 || rect.height < 3 {
        return handles;
    }
    let right = rect.end_x() - 1;
    let bottom = rect.end_y() - 1;
    let inner_w = rect.width - 2;
    let inner_h = rect.height - 2;
    handles.push(ResizeHandle {
        id,
        rect: Rect::new(rect.x + 1, rect.y, inner_w, 1),
        edge: ResizeEdge::Top,
    });
    handles.push(ResizeHandle {
        id,
        rect: Rect::new(rect.x + 1, bottom, inner_w, 1),
        edge: ResizeEdge::Bottom,
    });
    handles.push(ResizeHandle {
        id,
        rect: Rect::new(rect.x, rect.y + 1, 1, inner_h),
        edge: ResizeEdge::Left,
    });
    handles.push(ResizeHandle {
        id,
        rect: Rect::new(right, rect.y + 1, 1, inner_h),
        edge: ResizeEdge::Right,
    });
    handles
}

/// The header row just inside the top border.
pub fn header_handle(id: WindowId, rect: Rect) -> Option<DragHandle> {
    if rect.width < 3 || rect.height < 3 {
        return None;
    }
    Some(DragHandle {
        id,
        rect: Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, 1),
    })
}

pub fn resize_edge_at(id: WindowId, rect: Rect, point: Point) -> Option<ResizeEdge> {
    resize_handles(id, rect)
        .into_iter()
        .find(|handle| handle.rect.contains(point))
        .map(|handle| handle.edge)
}

/// New window origin for the pointer at `pointer`.
pub fn apply_move_drag(drag: &MoveDrag, pointer: Point) -> Point {
    drag.initial.offset(drag.start.delta_to(pointer))
}

/// Proposed rect for the pointer at `pointer`, holding the opposite edge still.
///
/// The rect never shrinks below `min_size`; when the moving edge would cross
/// that limit it stops there instead.
pub fn apply_resize_drag(drag: &ResizeDrag, pointer: Point, min_size: Size) -> Rect {
    let delta = drag.start.delta_to(pointer);
    let start = drag.start_rect;
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width;
    let mut height = start.height;

    let moves_left = matches!(
        drag.edge,
        ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
    );
    let moves_top = matches!(
        drag.edge,
        ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
    );

    if moves_left {
        x += delta.x;
        width -= delta.x;
    } else if matches!(
        drag.edge,
        ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
    ) {
        width += delta.x;
    }
    if moves_top {
        y += delta.y;
        height -= delta.y;
    } else if matches!(
        drag.edge,
        ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
    ) {
        height += delta.y;
    }

    let min_w = min_size.width.max(1);
    let min_h = min_size.height.max(1);
    if width < min_w {
        if moves_left {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if moves_top {
            y -= min_h - height;
        }
        height = min_h;
    }

    Rect::new(x, y, width, height)
}
