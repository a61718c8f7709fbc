//! Error types for physics operations
//!
//! Every variant here is a contract violation by the caller. Nothing is
//! retryable: the simulation is a deterministic function of its inputs, so
//! the same inputs fail the same way again.

use crate::body::BodyKey;
use crate::shapes::ShapeKind;
use thiserror::Error;
use tumble_math::ZeroLengthError;

/// Errors raised by the physics engine
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PhysicsError {
    /// A zero-length vector was normalized
    #[error("tried to normalize a zero length vector")]
    ZeroLength,
    /// The ray starts outside the sphere and points away from it
    #[error("ray origin is outside the sphere and the ray points away from it")]
    RayPointsAway,
    /// The ray passes by the sphere without touching it
    #[error("ray misses the sphere (negative discriminant)")]
    RayMissesSphere,
    /// No collision resolver exists for this shape pair
    #[error("collision between {a} and {b} is not implemented")]
    UnimplementedCollision { a: ShapeKind, b: ShapeKind },
    /// Two points were asked to collide; points have no area and never touch
    #[error("points cannot collide with other points")]
    PointPointCollision,
    /// Mass must be positive and finite
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    /// Tick rate must be positive and finite
    #[error("ticks per second must be positive and finite, got {0}")]
    InvalidTickRate(f32),
    /// Frame delta must be finite
    #[error("frame delta must be finite, got {0}")]
    InvalidDeltaTime(f32),
    /// The key does not refer to a body registered in this world
    #[error("body {0:?} is not registered in this world")]
    UnknownBody(BodyKey),
}

impl From<ZeroLengthError> for PhysicsError {
    fn from(_: ZeroLengthError) -> Self {
        PhysicsError::ZeroLength
    }
}
