use glam::DVec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrowphase primitive tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn overlap_rect_rect(a: &AaRect, b: &AaRect, rule: BoundaryRule) -> bool {
        if a.is_degenerate() || b.is_degenerate() {
            return false;
        }
        let (x, y, w, h) = (a.x(), a.y(), a.w(), a.h());
        let (x2, y2, w2, h2) = (b.x(), b.y(), b.w(), b.h());

        // Every axis must overlap.
        let x_axis = x <= x2 + w2 && x + w >= x2;
        let y_axis = match rule {
            BoundaryRule::Legacy => y <= y2 + h2 && y + h > y2,
            BoundaryRule::Inclusive => y <= y2 + h2 && y + h >= y2,
        };
        x_axis && y_axis
    }

    fn overlap_point_rect(p: DVec2, r: &AaRect) -> bool {
        let min = r.top_left();
        let max = r.bottom_right();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(a: AaRect, b: AaRect) -> bool {
        Narrowphase::overlap_rect_rect(&a, &b, BoundaryRule::Legacy)
    }

    #[test]
    fn test_overlap_rect_rect_basic() {
        let a = AaRect::new(0.0, 0.0, 10.0, 10.0);
        let b = AaRect::new(5.0, 5.0, 10.0, 10.0);
        assert!(legacy(a, b));
        assert!(legacy(b, a));
    }

    #[test]
    fn test_overlap_rect_rect_separated() {
        let a = AaRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!legacy(a, AaRect::new(10.1, 0.0, 10.0, 10.0)));
        assert!(!legacy(a, AaRect::new(0.0, -20.0, 10.0, 10.0)));
        assert!(!legacy(a, AaRect::new(-30.0, 40.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_rect_rect_contained() {
        let outer = AaRect::new(-50.0, -50.0, 100.0, 100.0);
        let inner = AaRect::new(-1.0, -1.0, 2.0, 2.0);
        assert!(legacy(outer, inner));
        assert!(legacy(inner, outer));
    }

    #[test]
    fn test_vertical_edges_touch() {
        let a = AaRect::new(0.0, 0.0, 10.0, 10.0);
        let right = AaRect::new(10.0, 0.0, 10.0, 10.0);
        assert!(legacy(a, right));
        assert!(legacy(right, a));
    }

    #[test]
    fn test_horizontal_edge_touch_is_one_sided() {
        let top = AaRect::new(0.0, 0.0, 10.0, 10.0);
        let below = AaRect::new(0.0, 10.0, 10.0, 10.0);
        // top.y + top.h == below.y fails the strict comparison
        assert!(!legacy(top, below));
        // below.y <= top.y + top.h is inclusive
        assert!(legacy(below, top));
    }

    #[test]
    fn test_inclusive_rule_is_symmetric_on_edges() {
        let top = AaRect::new(0.0, 0.0, 10.0, 10.0);
        let below = AaRect::new(0.0, 10.0, 10.0, 10.0);
        assert!(Narrowphase::overlap_rect_rect(&top, &below, BoundaryRule::Inclusive));
        assert!(Narrowphase::overlap_rect_rect(&below, &top, BoundaryRule::Inclusive));
    }

    #[test]
    fn test_degenerate_never_overlaps() {
        let b = AaRect::new(0.0, 0.0, 10.0, 10.0);
        for d in [
            AaRect::default(),
            AaRect::new(0.0, 5.0, 10.0, 0.0),
            AaRect::new(5.0, 5.0, 0.0, 3.0),
            AaRect::new(2.0, 2.0, -4.0, 4.0),
        ] {
            for rule in [BoundaryRule::Legacy, BoundaryRule::Inclusive] {
                assert!(!Narrowphase::overlap_rect_rect(&d, &b, rule));
                assert!(!Narrowphase::overlap_rect_rect(&b, &d, rule));
            }
        }
    }

    #[test]
    fn test_overlap_point_rect() {
        let r = AaRect::new(-1.0, -2.0, 2.0, 4.0);
        assert!(Narrowphase::overlap_point_rect(DVec2::new(0.0, 0.0), &r));
        assert!(Narrowphase::overlap_point_rect(DVec2::new(1.0, 2.0), &r));
        assert!(!Narrowphase::overlap_point_rect(DVec2::new(1.1, 0.0), &r));
    }
}
