//! Collision detection and resolution for 2D shapes
//!
//! Both tables are a double dispatch over [`ShapeKind`]. Each unordered pair
//! has exactly one geometric test; the mirrored entry swaps its arguments.
//! Only point-circle and circle-circle have resolvers. Every other pair
//! fails loudly so a misconfigured group surfaces immediately instead of
//! silently producing wrong physics.

use crate::body::Body;
use crate::error::PhysicsError;
use crate::impulse::resolve_sphere_sphere;
use crate::ray::intersect_ray_sphere;
use crate::shapes::{Aabb, Shape, ShapeKind, Sphere};
use tumble_math::Vec2;

/// Test a point against a circle (touching counts)
pub fn point_vs_sphere(point: Vec2, center: Vec2, sphere: &Sphere) -> bool {
    sphere.contains(center, point)
}

/// Test a point against a box (touching counts)
pub fn point_vs_box(point: Vec2, center: Vec2, aabb: &Aabb) -> bool {
    aabb.contains(center, point)
}

/// Test two circles for strict overlap
pub fn sphere_vs_sphere(center_a: Vec2, a: &Sphere, center_b: Vec2, b: &Sphere) -> bool {
    let radii = a.radius() + b.radius();
    center_a.distance_squared(center_b) < radii * radii
}

/// Test a box against a circle
///
/// Accumulates the squared distance from the circle center to the box along
/// each axis where the center lies outside it. A center inside the box
/// accumulates nothing and always intersects.
pub fn box_vs_sphere(box_center: Vec2, aabb: &Aabb, sphere_center: Vec2, sphere: &Sphere) -> bool {
    let min = aabb.min(box_center);
    let max = aabb.max(box_center);
    let mut d = 0.0;

    if sphere_center.x < min.x {
        let s = sphere_center.x - min.x;
        d += s * s;
    } else if sphere_center.x > max.x {
        let s = sphere_center.x - max.x;
        d += s * s;
    }
    if sphere_center.y < min.y {
        let s = sphere_center.y - min.y;
        d += s * s;
    } else if sphere_center.y > max.y {
        let s = sphere_center.y - max.y;
        d += s * s;
    }

    d <= sphere.radius_sq()
}

/// Test two boxes for strict overlap
pub fn box_vs_box(center_a: Vec2, a: &Aabb, center_b: Vec2, b: &Aabb) -> bool {
    (center_a.x - center_b.x).abs() * 2.0 < a.width + b.width
        && (center_a.y - center_b.y).abs() * 2.0 < a.height + b.height
}

/// Check whether two bodies intersect, dispatching on both shapes
pub fn intersects(a: &Body, b: &Body) -> bool {
    let (pa, pb) = (a.position, b.position);
    match (a.shape(), b.shape()) {
        // Zero-radius bodies cannot overlap
        (Shape::Point, Shape::Point) => false,
        (Shape::Point, Shape::Sphere(s)) => point_vs_sphere(pa, pb, s),
        (Shape::Sphere(s), Shape::Point) => point_vs_sphere(pb, pa, s),
        (Shape::Point, Shape::Box(r)) => point_vs_box(pa, pb, r),
        (Shape::Box(r), Shape::Point) => point_vs_box(pb, pa, r),
        (Shape::Sphere(sa), Shape::Sphere(sb)) => sphere_vs_sphere(pa, sa, pb, sb),
        (Shape::Box(r), Shape::Sphere(s)) => box_vs_sphere(pa, r, pb, s),
        (Shape::Sphere(s), Shape::Box(r)) => box_vs_sphere(pb, r, pa, s),
        (Shape::Box(ra), Shape::Box(rb)) => box_vs_box(pa, ra, pb, rb),
    }
}

/// Find the first body in `candidates` that intersects `body`
///
/// This is the first match in iteration order, not the closest or deepest.
/// `body` itself is skipped if it appears among the candidates.
pub fn find_single_intersection<'a, I>(body: &Body, candidates: I) -> Option<&'a Body>
where
    I: IntoIterator<Item = &'a Body>,
{
    candidates
        .into_iter()
        .find(|other| !std::ptr::eq(*other, body) && intersects(body, other))
}

/// Resolve a collision between two intersecting bodies in place
///
/// `a` is the body driving the resolution. Pairs without a resolver return
/// [`PhysicsError::UnimplementedCollision`].
pub fn collide(a: &mut Body, b: &mut Body) -> Result<(), PhysicsError> {
    match (a.kind(), b.kind()) {
        (ShapeKind::Point, ShapeKind::Sphere) => point_collides_sphere(a, b),
        (ShapeKind::Sphere, ShapeKind::Sphere) => resolve_sphere_sphere(a, b),
        (ShapeKind::Point, ShapeKind::Point) => Err(PhysicsError::PointPointCollision),
        (kind_a, kind_b) => Err(PhysicsError::UnimplementedCollision {
            a: kind_a,
            b: kind_b,
        }),
    }
}

/// Swept point-circle response
///
/// Rebuilds the ray the point traveled this sub-step from `prev_position`,
/// finds where it crossed the surface, and bounces the point off it. The
/// point keeps moving along the reflected ray for the rest of the distance it
/// covered this step, so fast points do not lose speed to the snap.
///
/// A point whose previous position was already inside the circle is not
/// reflected: it is moved to the exit point ahead of it if it was heading
/// out, otherwise back to where its ray entered.
pub fn point_collides_sphere(point: &mut Body, sphere: &Body) -> Result<(), PhysicsError> {
    let radius_sq = match sphere.shape() {
        Shape::Sphere(s) => s.radius_sq(),
        _ => {
            return Err(PhysicsError::UnimplementedCollision {
                a: point.kind(),
                b: sphere.kind(),
            })
        }
    };
    let center = sphere.position;
    let origin = point.prev_position;

    let in_ray = (point.position - origin).normalize()?;
    let hit = intersect_ray_sphere(origin, in_ray, center, radius_sq)?;

    let friction = point.material.friction.min(sphere.material.friction);
    point.velocity *= friction;

    if hit.t < 0.0 {
        let exit = intersect_ray_sphere(origin, -in_ray, center, radius_sq)?;
        point.position = if exit.t > hit.t { exit.point } else { hit.point };
        return Ok(());
    }

    let normal = (hit.point - center).normalize()?;
    let out_ray = in_ray.reflect(normal);
    point.velocity = point.velocity.reflect(normal);

    let remaining = origin.distance(point.position) - hit.t;
    point.position = hit.point + out_ray * remaining;
    Ok(())
}
