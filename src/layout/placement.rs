use super::Rect;
use super::region::{intersects, mtv_offset};
use crate::error::WindowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            ResizeEdge::TopLeft
                | ResizeEdge::TopRight
                | ResizeEdge::BottomLeft
                | ResizeEdge::BottomRight
        )
    }
}

/// Adjusts `proposed` so it stops overlapping the rects in `blocking`.
///
/// With an `edge` only that edge is pulled back to the blocker; otherwise the
/// rect is pushed out with [`mtv_offset`]. Blockers are handled one after the
/// other against the rect as corrected so far, so a later correction can undo
/// an earlier one. Use [`residual_overlaps`] to detect that case.
pub fn resolve_placement(
    proposed: Rect,
    edge: Option<ResizeEdge>,
    blocking: &[Rect],
) -> Result<Rect, WindowError> {
    if let Some(edge) = edge
        && edge.is_diagonal()
    {
        return Err(WindowError::UnsupportedEdge(edge));
    }
    let mut rect = proposed;
    for blocker in blocking {
        if !intersects(rect, *blocker) {
            continue;
        }
        rect = match edge {
            Some(edge) => clamp_edge(rect, edge, *blocker),
            None => rect.translate(mtv_offset(rect, *blocker)),
        };
    }
    Ok(rect)
}

/// Number of blockers `rect` still overlaps.
pub fn residual_overlaps(rect: Rect, blocking: &[Rect]) -> usize {
    blocking
        .iter()
        .filter(|blocker| intersects(rect, **blocker))
        .count()
}

fn clamp_edge(rect: Rect, edge: ResizeEdge, blocker: Rect) -> Rect {
    match edge {
        ResizeEdge::Top => {
            let y = blocker.end_y();
            Rect::new(rect.x, y, rect.width, rect.height - (y - rect.y))
        }
        ResizeEdge::Bottom => Rect::new(rect.x, rect.y, rect.width, blocker.y - rect.y),
        ResizeEdge::Left => {
            let x = blocker.end_x();
            Rect::new(x, rect.y, rect.width - (x - rect.x), rect.height)
        }
        ResizeEdge::Right => Rect::new(rect.x, rect.y, blocker.x - rect.x, rect.height),
        // rejected before any clamping happens
        _ => rect,
    }
}
