//! Rectangle region algebra shared by window placement and entity motion.
//!
//! All predicates use open intervals: rects that merely share an edge do not
//! intersect, and empty rects intersect nothing.

use super::{Point, Rect, Scalar, max_s, min_s};

pub fn intersects<T: Scalar>(a: Rect<T>, b: Rect<T>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.x < b.end_x() && b.x < a.end_x() && a.y < b.end_y() && b.y < a.end_y()
}

/// Overlapping area of `a` and `b`, or `None` when they do not intersect.
pub fn intersection<T: Scalar>(a: Rect<T>, b: Rect<T>) -> Option<Rect<T>> {
    if !intersects(a, b) {
        return None;
    }
    let x = max_s(a.x, b.x);
    let y = max_s(a.y, b.y);
    let end_x = min_s(a.end_x(), b.end_x());
    let end_y = min_s(a.end_y(), b.end_y());
    Some(Rect::new(x, y, end_x - x, end_y - y))
}

/// Remainder of `original` once `cut` is removed.
///
/// Produces at most four fragments in the order top, bottom, left, right. The
/// top and bottom bands span the full width of `original`; the side bands only
/// span the height of the intersection. Fragments are never coalesced.
pub fn subtract<T: Scalar>(original: Rect<T>, cut: Rect<T>) -> Vec<Rect<T>> {
    let Some(hole) = intersection(original, cut) else {
        return vec![original];
    };
    let mut fragments = Vec::with_capacity(4);
    if original.y < hole.y {
        fragments.push(Rect::new(
            original.x,
            original.y,
            original.width,
            hole.y - original.y,
        ));
    }
    if original.end_y() > hole.end_y() {
        fragments.push(Rect::new(
            original.x,
            hole.end_y(),
            original.width,
            original.end_y() - hole.end_y(),
        ));
    }
    if original.x < hole.x {
        fragments.push(Rect::new(
            original.x,
            hole.y,
            hole.x - original.x,
            hole.height,
        ));
    }
    if original.end_x() > hole.end_x() {
        fragments.push(Rect::new(
            hole.end_x(),
            hole.y,
            original.end_x() - hole.end_x(),
            hole.height,
        ));
    }
    fragments
}

/// Subtracts every rect in `cuts` from `original`, re-cutting each surviving
/// fragment in turn. The fragment layout depends on the order of `cuts`; the
/// covered area does not.
pub fn subtract_all<T: Scalar>(original: Rect<T>, cuts: &[Rect<T>]) -> Vec<Rect<T>> {
    let mut fragments = vec![original];
    for cut in cuts {
        fragments = carve(fragments, *cut);
    }
    fragments
}

/// Cuts `hole` out of every rect in `rects`, keeping their relative order.
pub(crate) fn carve<T: Scalar>(rects: Vec<Rect<T>>, hole: Rect<T>) -> Vec<Rect<T>> {
    rects
        .into_iter()
        .flat_map(|rect| subtract(rect, hole))
        .collect()
}

/// Minimum translation that pushes `moving` out of `blocker` along the axis of
/// least overlap.
///
/// The push goes away from the blocker's center; when the centers coincide on
/// that axis the negative direction wins. When `moving` straddles one edge of
/// the blocker the push equals the overlap extent; when one rect is nested in
/// the other on that axis the push reaches the blocker's far side, so a single
/// application always separates the pair. Returns a zero offset when the rects
/// do not intersect.
pub fn mtv_offset<T: Scalar>(moving: Rect<T>, blocker: Rect<T>) -> Point<T> {
    let Some(overlap) = intersection(moving, blocker) else {
        return Point::zero();
    };
    let center = moving.center();
    let blocker_center = blocker.center();
    if overlap.width < overlap.height {
        let dx = if center.x <= blocker_center.x {
            blocker.x - moving.end_x()
        } else {
            blocker.end_x() - moving.x
        };
        Point::new(dx, T::ZERO)
    } else {
        let dy = if center.y <= blocker_center.y {
            blocker.y - moving.end_y()
        } else {
            blocker.end_y() - moving.y
        };
        Point::new(T::ZERO, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(rects: &[Rect]) -> i32 {
        rects.iter().map(|r| r.width * r.height).sum()
    }

    fn pairwise_disjoint(rects: &[Rect]) -> bool {
        rects.iter().enumerate().all(|(i, a)| {
            rects
                .iter()
                .skip(i + 1)
                .all(|b| !intersects(*a, *b))
        })
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!intersects(a, b));
        assert!(intersection(a, b).is_none());
        let c = Rect::new(9, 9, 10, 10);
        assert!(intersects(a, c));
        assert_eq!(intersection(a, c), Some(Rect::new(9, 9, 1, 1)));
    }

    #[test]
    fn empty_rects_never_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!intersects(a, Rect::new(5, 5, 0, 3)));
        assert!(!intersects(Rect::new(5, 5, 3, 0), a));
    }

    #[test]
    fn subtract_disjoint_returns_original() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 5, 5);
        assert_eq!(subtract(a, b), vec![a]);
    }

    #[test]
    fn subtract_center_hole_yields_four_bands() {
        let a = Rect::new(0, 0, 10, 10);
        let hole = Rect::new(3, 4, 2, 2);
        let parts = subtract(a, hole);
        assert_eq!(
            parts,
            vec![
                Rect::new(0, 0, 10, 4),
                Rect::new(0, 6, 10, 4),
                Rect::new(0, 4, 3, 2),
                Rect::new(5, 4, 5, 2),
            ]
        );
        assert!(pairwise_disjoint(&parts));
        assert_eq!(area(&parts), 100 - 4);
        assert!(parts.iter().all(|p| !intersects(*p, hole)));
    }

    #[test]
    fn subtract_full_cover_is_empty() {
        let a = Rect::new(2, 2, 4, 4);
        assert!(subtract(a, Rect::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn subtract_edge_overlap_keeps_positive_extent_only() {
        let a = Rect::new(0, 0, 10, 10);
        let parts = subtract(a, Rect::new(-5, -5, 10, 20));
        assert_eq!(parts, vec![Rect::new(5, 0, 5, 10)]);
    }

    #[test]
    fn subtract_all_single_cut_matches_subtract() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(6, -2, 10, 5);
        assert_eq!(subtract_all(a, &[b]), subtract(a, b));
    }

    #[test]
    fn subtract_all_area_is_order_independent() {
        let a = Rect::new(0, 0, 20, 20);
        let cuts = [Rect::new(2, 2, 6, 6), Rect::new(5, 5, 10, 3), Rect::new(15, 0, 5, 20)];
        let forward = subtract_all(a, &cuts);
        let mut reversed_cuts = cuts;
        reversed_cuts.reverse();
        let backward = subtract_all(a, &reversed_cuts);
        assert!(pairwise_disjoint(&forward));
        assert!(pairwise_disjoint(&backward));
        // union of cuts inside `a`: 36 + 30 + 100 - overlap(6x6 and 10x3 => 3x3) = 157
        assert_eq!(area(&forward), 400 - 157);
        assert_eq!(area(&forward), area(&backward));
        for part in forward.iter().chain(backward.iter()) {
            assert!(cuts.iter().all(|c| !intersects(*part, *c)));
        }
    }

    #[test]
    fn mtv_pushes_along_smaller_overlap() {
        let blocker = Rect::new(100, 100, 200, 200);
        let moving = Rect::new(150, 100, 200, 200);
        assert_eq!(mtv_offset(moving, blocker), Point::new(150, 0));

        let above = Rect::new(100, 60, 200, 50);
        assert_eq!(mtv_offset(above, blocker), Point::new(0, -10));
    }

    #[test]
    fn mtv_tie_goes_negative() {
        let blocker = Rect::new(0, 0, 10, 10);
        let moving = Rect::new(0, 6, 10, 10);
        // overlap 10x4: push on y, moving center is below => positive
        assert_eq!(mtv_offset(moving, blocker), Point::new(0, 4));
        let same_center = Rect::new(2, 2, 6, 6);
        // square overlap falls through to the y axis, centers equal => negative,
        // and the nested rect is pushed clear of the blocker's top edge
        assert_eq!(mtv_offset(same_center, blocker), Point::new(0, -8));
    }

    #[test]
    fn mtv_resolves_single_blocker() {
        let blocker = Rect::new(10, 10, 30, 30);
        for moving in [
            Rect::new(0, 0, 15, 15),
            Rect::new(35, 12, 10, 5),
            Rect::new(20, 35, 5, 10),
            Rect::new(12, 12, 4, 4),
        ] {
            let resolved = moving.translate(mtv_offset(moving, blocker));
            assert!(!intersects(resolved, blocker), "{moving:?} -> {resolved:?}");
        }
    }

    #[test]
    fn float_rects_share_the_algebra() {
        let a = Rect::new(0.0, 0.0, 4.0, 2.0);
        let b = Rect::new(3.5, 0.5, 4.0, 4.0);
        assert_eq!(intersection(a, b), Some(Rect::new(3.5, 0.5, 0.5, 1.5)));
        assert_eq!(mtv_offset(a, b), Point::new(-0.5, 0.0));
    }

    #[test]
    fn mtv_clears_a_blocker_nested_on_the_push_axis() {
        // the blocker lies inside `moving` on x, so the overlap width alone
        // would leave them intersecting
        let moving = Rect::new(0, 0, 30, 30);
        let blocker = Rect::new(10, 5, 5, 20);
        let offset = mtv_offset(moving, blocker);
        assert_eq!(offset, Point::new(15, 0));
        assert!(!intersects(moving.translate(offset), blocker));
    }
}
