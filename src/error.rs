use thiserror::Error;

use crate::Priority;

/// Failures raised by shape construction and collision dispatch.
///
/// None of these are transient: they point at a missing dispatch case or a
/// bad call site, so callers should not retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// The shape being tested has no routine for the other shape's priority.
    #[error("unknown collision priority {priority}")]
    UnsupportedShape { priority: Priority },

    /// A [`Dispatcher`](crate::Dispatcher) has no routine for this ordered pair.
    #[error("no narrowphase routine registered for priorities ({a}, {b})")]
    UnsupportedPair { a: Priority, b: Priority },

    /// A shape reported a priority that belongs to a different concrete type.
    #[error("shape with priority {priority} is not a {expected}")]
    ShapeMismatch {
        priority: Priority,
        expected: &'static str,
    },

    /// A positional parameter list had more than four entries.
    #[error("invalid parameter count {count}, expected 0 to 4")]
    InvalidArgument { count: usize },
}
