use std::collections::HashMap;

use crate::api::{Collidable, NarrowphaseApi};
use crate::error::CollisionError;
use crate::narrowphase::Narrowphase;
use crate::types::*;
use crate::Priority;

/// Intersection routine for one ordered pair of priorities.
///
/// The first argument is the caller's shape. Routines recover concrete types
/// with `<dyn Collidable>::downcast`.
pub type Routine =
    fn(&dyn Collidable, &dyn Collidable, BoundaryRule) -> Result<bool, CollisionError>;

/// Built-in routine for `(AaRect::PRIORITY, AaRect::PRIORITY)`.
pub fn rect_rect(
    a: &dyn Collidable,
    b: &dyn Collidable,
    rule: BoundaryRule,
) -> Result<bool, CollisionError> {
    let a = a.downcast::<AaRect>()?;
    let b = b.downcast::<AaRect>()?;
    Ok(Narrowphase::overlap_rect_rect(a, b, rule))
}

/// Priority-keyed table of narrowphase routines.
///
/// New shapes plug in by registering routines for the priorities they can be
/// tested against; existing shapes never need to know about them.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    cfg: CollisionConfig,
    routines: HashMap<(Priority, Priority), Routine>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_builtin(CollisionConfig::default())
    }
}

impl Dispatcher {
    /// Empty table.
    pub fn new(cfg: CollisionConfig) -> Self {
        Self {
            cfg,
            routines: HashMap::new(),
        }
    }

    /// Table with every built-in shape pair registered.
    pub fn with_builtin(cfg: CollisionConfig) -> Self {
        let mut d = Self::new(cfg);
        d.register(AaRect::PRIORITY, AaRect::PRIORITY, rect_rect);
        d
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.cfg
    }

    /// Insert the routine for the ordered pair `(a, b)`, returning the one it replaces.
    pub fn register(&mut self, a: Priority, b: Priority, routine: Routine) -> Option<Routine> {
        log::debug!("registering narrowphase routine for priorities ({a}, {b})");
        self.routines.insert((a, b), routine)
    }

    pub fn supports(&self, a: Priority, b: Priority) -> bool {
        self.routines.contains_key(&(a, b))
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Test `a` against `b` with the routine registered for their priorities.
    pub fn collide<'a>(
        &self,
        a: &'a dyn Collidable,
        b: &'a dyn Collidable,
    ) -> Result<Option<CollisionContext<'a>>, CollisionError> {
        let key = (a.priority(), b.priority());
        log::trace!("dispatching priorities {key:?}");
        let Some(routine) = self.routines.get(&key) else {
            log::warn!("no narrowphase routine for priorities {key:?}");
            return Err(CollisionError::UnsupportedPair { a: key.0, b: key.1 });
        };
        let hit = routine(a, b, self.cfg.boundary)?;
        Ok(hit.then(|| CollisionContext::new(a, b)))
    }
}
