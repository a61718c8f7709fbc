//! 2D Mathematics Library
//!
//! This crate provides the 2D vector type shared by the tumble physics engine
//! and the sketches built on top of it.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`ZeroLengthError`] - returned when normalizing a zero vector

mod vec2;

pub use vec2::{Vec2, ZeroLengthError};
