//! Ray casting against circles

use crate::error::PhysicsError;
use tumble_math::Vec2;

/// Where a ray meets a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Intersection point
    pub point: Vec2,
    /// Signed distance along the ray from its origin; negative when the
    /// origin is already inside the circle
    pub t: f32,
}

/// Intersect a unit-length ray with a circle, returning the near hit
///
/// Solves `|origin + t·ray - center|² = r²` for the smaller root. Callers must
/// already know the ray reaches the circle (via the intersection tests):
/// a ray that starts outside and points away, or one that passes by, is a
/// contract violation and returns an error.
pub fn intersect_ray_sphere(
    origin: Vec2,
    ray: Vec2,
    center: Vec2,
    radius_sq: f32,
) -> Result<RayHit, PhysicsError> {
    let to_origin = origin - center;
    let b = to_origin.dot(ray);
    let c = to_origin.length_squared() - radius_sq;

    if c > 0.0 && b > 0.0 {
        return Err(PhysicsError::RayPointsAway);
    }

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return Err(PhysicsError::RayMissesSphere);
    }

    let t = -b - discriminant.sqrt();
    Ok(RayHit {
        point: origin + ray * t,
        t,
    })
}
