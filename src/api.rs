use std::any::Any;
use std::fmt::Debug;

use crate::error::CollisionError;
use crate::narrowphase::Narrowphase;
use crate::types::*;
use crate::Priority;

/// Capability every shape taking part in collision tests provides.
///
/// A shape reports a dispatch priority identifying its concrete variant, and
/// knows how to test itself against the priorities it supports. Shapes are
/// immutable after construction, so they may be shared across threads.
pub trait Collidable: Any + Debug + Send + Sync {
    /// Tag identifying the concrete shape variant. Only used as a dispatch key.
    fn priority(&self) -> Priority;

    /// Test `self` against `other`.
    ///
    /// Returns `Ok(None)` when the shapes do not overlap and
    /// [`CollisionError::UnsupportedShape`] when `self` has no routine for
    /// `other.priority()`.
    fn collide<'a>(
        &'a self,
        other: &'a dyn Collidable,
    ) -> Result<Option<CollisionContext<'a>>, CollisionError>;

    /// Concrete-type access for routines selected by priority.
    fn as_any(&self) -> &dyn Any;
}

impl<'a> dyn Collidable + 'a {
    /// Recover the concrete shape behind a priority tag.
    pub fn downcast<T: Collidable>(&self) -> Result<&T, CollisionError> {
        self.as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| CollisionError::ShapeMismatch {
                priority: self.priority(),
                expected: std::any::type_name::<T>(),
            })
    }
}

impl Collidable for AaRect {
    fn priority(&self) -> Priority {
        Self::PRIORITY
    }

    fn collide<'a>(
        &'a self,
        other: &'a dyn Collidable,
    ) -> Result<Option<CollisionContext<'a>>, CollisionError> {
        let hit = match other.priority() {
            AaRect::PRIORITY => {
                let rect = other.downcast::<AaRect>()?;
                Narrowphase::overlap_rect_rect(self, rect, BoundaryRule::Legacy)
            }
            priority => {
                log::warn!("AaRect has no routine for collision priority {priority}");
                return Err(CollisionError::UnsupportedShape { priority });
            }
        };
        Ok(hit.then(|| CollisionContext::new(self, other)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Narrowphase primitive intersection signatures.
pub trait NarrowphaseApi {
    /// Axis-aligned rectangle overlap under the given boundary rule.
    fn overlap_rect_rect(a: &AaRect, b: &AaRect, rule: BoundaryRule) -> bool;

    /// Point containment, inclusive on every edge.
    fn overlap_point_rect(p: glam::DVec2, r: &AaRect) -> bool;
}
