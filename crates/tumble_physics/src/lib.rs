//! Fixed-timestep 2D physics for tumble
//!
//! This crate provides a small deterministic simulation of points, circles
//! and axis-aligned boxes, including:
//! - Collision shapes and pairwise intersection tests
//! - Ray-based resolution for points striking circles
//! - Impulse-based resolution for circles striking circles
//! - Named interaction groups deciding which bodies collide
//! - A fixed-tick integrator with a partial final tick

pub mod body;
pub mod collision;
pub mod error;
pub mod group;
pub mod impulse;
pub mod integrator;
pub mod material;
pub mod ray;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{Body, BodyKey};
pub use collision::{collide, find_single_intersection, intersects, point_collides_sphere};
pub use error::PhysicsError;
pub use group::{AllGroup, InteractionGroups, OneWayGroup, Side, DEFAULT_GROUP};
pub use impulse::resolve_sphere_sphere;
pub use integrator::IntegrationIterator;
pub use material::PhysicsMaterial;
pub use ray::{intersect_ray_sphere, RayHit};
pub use shapes::{Aabb, Shape, ShapeKind, Sphere};
pub use world::{PhysicsConfig, PhysicsWorld};
