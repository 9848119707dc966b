//! phosphaze_collision: narrow-phase collision detection for 2D shapes (no resolution, no broad-phase)

pub mod types;
pub mod api;
pub mod error;
pub mod narrowphase;
pub mod dispatch;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::CollisionError;
pub use crate::dispatch::{Dispatcher, Routine};

/// Dispatch priority tag identifying a concrete shape variant.
pub type Priority = i32;
