use glam::DVec2;

use crate::api::{Collidable, NarrowphaseApi};
use crate::error::CollisionError;
use crate::narrowphase::Narrowphase;
use crate::Priority;

/// Axis-aligned rectangle with its top-left corner at `(x, y)`.
///
/// Immutable once built. Zero or negative extents are accepted and yield a
/// degenerate rectangle that never collides.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AaRect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl AaRect {
    /// Dispatch priority of axis-aligned rectangles.
    pub const PRIORITY: Priority = 1;

    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `side` at the origin.
    pub fn square(side: f64) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    /// Rectangle of `w` by `h` at the origin.
    pub fn sized(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Square of side `side` with its top-left corner at `(x, y)`.
    pub fn square_at(x: f64, y: f64, side: f64) -> Self {
        Self::new(x, y, side, side)
    }

    /// Build from a positional parameter list:
    ///
    /// | len | meaning          |
    /// |-----|------------------|
    /// | 0   | all zero         |
    /// | 1   | `side`           |
    /// | 2   | `w, h`           |
    /// | 3   | `x, y, side`     |
    /// | 4   | `x, y, w, h`     |
    ///
    /// Any other length is rejected.
    pub fn from_params(params: &[f64]) -> Result<Self, CollisionError> {
        match *params {
            [] => Ok(Self::default()),
            [side] => Ok(Self::square(side)),
            [w, h] => Ok(Self::sized(w, h)),
            [x, y, side] => Ok(Self::square_at(x, y, side)),
            [x, y, w, h] => Ok(Self::new(x, y, w, h)),
            _ => Err(CollisionError::InvalidArgument {
                count: params.len(),
            }),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.w + self.h)
    }

    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.x + self.w, self.y)
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.x, self.y + self.h)
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.x + self.w, self.y + self.h)
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// True unless both extents are strictly positive (NaN counts as degenerate).
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Overlap under [`BoundaryRule::Legacy`], the rule `collide` uses.
    pub fn overlaps(&self, other: &AaRect) -> bool {
        self.overlaps_with(other, BoundaryRule::Legacy)
    }

    pub fn overlaps_with(&self, other: &AaRect, rule: BoundaryRule) -> bool {
        Narrowphase::overlap_rect_rect(self, other, rule)
    }

    /// Integral box for collaborators such as renderers.
    ///
    /// Each field is truncated toward zero; values outside `i32` saturate and
    /// NaN becomes 0.
    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.x as i32,
            y: self.y as i32,
            w: self.w as i32,
            h: self.h as i32,
        }
    }
}

impl TryFrom<&[f64]> for AaRect {
    type Error = CollisionError;

    fn try_from(params: &[f64]) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}

impl TryFrom<Vec<f64>> for AaRect {
    type Error = CollisionError;

    fn try_from(params: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_params(&params)
    }
}

impl From<&AaRect> for Rectangle {
    fn from(r: &AaRect) -> Self {
        r.as_rectangle()
    }
}

/// Integer axis-aligned box (top-left `x, y`, extents `w, h`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// How touching edges are treated by the rectangle predicate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryRule {
    /// Inclusive on both x edges and the top edge, strict on `y + h > y2`.
    /// Shapes touching only along a horizontal edge do not collide when the
    /// caller's shape is above.
    #[default]
    Legacy,
    /// Inclusive on all four comparisons.
    Inclusive,
}

/// Tunables consumed by a [`Dispatcher`](crate::Dispatcher).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollisionConfig {
    pub boundary: BoundaryRule,
}

/// Evidence that two shapes overlap.
///
/// Only produced by a successful collision test. Slot `a` always holds the
/// shape the test was invoked on.
#[derive(Copy, Clone, Debug)]
pub struct CollisionContext<'a> {
    a: &'a dyn Collidable,
    b: &'a dyn Collidable,
}

impl<'a> CollisionContext<'a> {
    pub(crate) fn new(a: &'a dyn Collidable, b: &'a dyn Collidable) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &'a dyn Collidable {
        self.a
    }

    pub fn b(&self) -> &'a dyn Collidable {
        self.b
    }

    pub fn pair(&self) -> (&'a dyn Collidable, &'a dyn Collidable) {
        (self.a, self.b)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let cfg = CollisionConfig {
            boundary: BoundaryRule::Inclusive,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CollisionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_config_missing_fields_default() {
        let cfg: CollisionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CollisionConfig::default());
        assert_eq!(cfg.boundary, BoundaryRule::Legacy);
    }
}
