//! Impulse-based response for circle contacts
//!
//! Terms used below:
//!
//! - `j`: magnitude of the scalar impulse along the contact normal `n`
//! - `ε`: coefficient of restitution (1 = elastic, 0 = fully inelastic)
//! - `I`: moment of inertia, the rotational analogue of mass
//! - `r⊥·n`: the lever arm, how far off-center the contact point sits,
//!   projected onto the normal
//!
//! From conservation of momentum and `(v'₂ - v'₁)·n = -ε(v₂ - v₁)·n`:
//!
//! ```text
//!      (ε + 1)(v₂·n - v₁·n)
//! j = ------------------------------------------------
//!      1/m₁ + 1/m₂ + (r₁⊥·n)²/I₁ + (r₂⊥·n)²/I₂
//! ```
//!
//! See Game Engine Architecture, 1st Edition, pg. 650, and Chris Hecker's
//! rigid body dynamics articles for the rotational terms.

use crate::body::Body;
use crate::error::PhysicsError;
use tumble_math::Vec2;

/// Lever arm of a contact point relative to a body's center
///
/// A contact exactly at the center has no lever and produces no torque.
fn lever_arm(body: &Body, normal: Vec2, contact: Vec2) -> f32 {
    match (contact - body.position).normalize() {
        Ok(offset) => normal.dot(offset.perpendicular_cw()),
        Err(_) => 0.0,
    }
}

/// Rotational contribution `lever²/I`; bodies without inertia contribute nothing
fn rotational_term(lever: f32, moment_of_inertia: f32) -> f32 {
    if moment_of_inertia > 0.0 {
        lever * lever / moment_of_inertia
    } else {
        0.0
    }
}

/// Apply the linear and angular collision impulse to both bodies
///
/// `normal` is the unit normal pointing from `a` toward `b` and `contact`
/// the approximate contact point. Returns the scalar impulse that was
/// applied, or `None` when the bodies were already separating.
pub fn update_collision_velocity(
    a: &mut Body,
    b: &mut Body,
    normal: Vec2,
    contact: Vec2,
) -> Option<f32> {
    let relative_velocity = (b.velocity - a.velocity).dot(normal);
    if relative_velocity > 0.0 {
        // Moving away from each other
        return None;
    }

    let lever_a = lever_arm(a, normal, contact);
    let lever_b = lever_arm(b, normal, contact);
    let restitution = a.material.combine(&b.material).restitution;

    let impulse_scalar = ((restitution + 1.0) * (b.velocity.dot(normal) - a.velocity.dot(normal)))
        / (a.inv_mass()
            + b.inv_mass()
            + rotational_term(lever_a, a.moment_of_inertia())
            + rotational_term(lever_b, b.moment_of_inertia()));

    let impulse = normal * impulse_scalar;
    a.velocity += impulse * a.inv_mass();
    // Subtracted: the normal belongs to `a`, so it points the other way for `b`
    b.velocity -= impulse * b.inv_mass();

    if a.moment_of_inertia() > 0.0 {
        a.angular_velocity += lever_a * impulse_scalar / a.moment_of_inertia();
    }
    if b.moment_of_inertia() > 0.0 {
        b.angular_velocity -= lever_b * impulse_scalar / b.moment_of_inertia();
    }

    Some(impulse_scalar)
}

/// Push two overlapping bodies apart along `normal`
///
/// Each body moves by a share of the overlap proportional to the other
/// body's mass, so the lighter body moves further. Velocities are untouched.
pub fn update_overlap(a: &mut Body, b: &mut Body, normal: Vec2, overlap: f32) {
    let ratio = b.mass() / (a.mass() + b.mass());
    a.position -= normal * (overlap * ratio);
    b.position += normal * (overlap * (1.0 - ratio));
}

/// Resolve a circle-circle contact with an impulse and positional correction
pub fn resolve_sphere_sphere(a: &mut Body, b: &mut Body) -> Result<(), PhysicsError> {
    let radius_a = a.radius();
    let overlap = radius_a + b.radius() - a.position.distance(b.position);
    let normal = (b.position - a.position).normalize()?;
    let contact = a.position + normal * (radius_a + overlap / 2.0);

    update_collision_velocity(a, b, normal, contact);
    update_overlap(a, b, normal, overlap);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_head_on_elastic_swap() {
        let mut a = Body::new_sphere(Vec2::new(-0.9, 0.0), 1.0)
            .with_velocity(Vec2::new(1.0, 0.0))
            .with_restitution(1.0);
        let mut b = Body::new_sphere(Vec2::new(0.9, 0.0), 1.0)
            .with_velocity(Vec2::new(-1.0, 0.0))
            .with_restitution(1.0);

        resolve_sphere_sphere(&mut a, &mut b).unwrap();

        assert!(approx(a.velocity.x, -1.0));
        assert!(approx(b.velocity.x, 1.0));
        assert!(approx(a.velocity.y, 0.0));
        assert!(approx(b.velocity.y, 0.0));
        // Momentum is conserved
        assert!(approx(a.velocity.x * a.mass() + b.velocity.x * b.mass(), 0.0));
        // A head-on hit has no lever arm
        assert!(approx(a.angular_velocity, 0.0));
        assert!(approx(b.angular_velocity, 0.0));
    }

    #[test]
    fn test_inelastic_contact_matches_velocities() {
        let mut a = Body::new_sphere(Vec2::new(-0.9, 0.0), 1.0)
            .with_velocity(Vec2::new(2.0, 0.0))
            .with_restitution(0.0);
        let mut b = Body::new_sphere(Vec2::new(0.9, 0.0), 1.0);

        resolve_sphere_sphere(&mut a, &mut b).unwrap();

        // Equal masses, no bounce: both end up at half speed
        assert!(approx(a.velocity.x, 1.0));
        assert!(approx(b.velocity.x, 1.0));
    }

    #[test]
    fn test_restitution_uses_minimum() {
        let mut a = Body::new_sphere(Vec2::new(-0.9, 0.0), 1.0)
            .with_velocity(Vec2::new(1.0, 0.0))
            .with_restitution(1.0);
        let mut b = Body::new_sphere(Vec2::new(0.9, 0.0), 1.0)
            .with_velocity(Vec2::new(-1.0, 0.0))
            .with_restitution(0.0);

        resolve_sphere_sphere(&mut a, &mut b).unwrap();

        assert!(approx(a.velocity.x, 0.0));
        assert!(approx(b.velocity.x, 0.0));
    }

    #[test]
    fn test_separating_bodies_keep_velocity() {
        let mut a = Body::new_sphere(Vec2::new(-0.9, 0.0), 1.0).with_velocity(Vec2::new(-1.0, 0.0));
        let mut b = Body::new_sphere(Vec2::new(0.9, 0.0), 1.0).with_velocity(Vec2::new(1.0, 0.0));

        let impulse = update_collision_velocity(&mut a, &mut b, Vec2::X, Vec2::ZERO);

        assert_eq!(impulse, None);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_overlap_split_by_mass() {
        let mut light = Body::new_sphere(Vec2::new(-0.5, 0.0), 1.0);
        let mut heavy = Body::new_sphere(Vec2::new(0.5, 0.0), 1.0).with_mass(3.0).unwrap();

        update_overlap(&mut light, &mut heavy, Vec2::X, 1.0);

        // The light body takes three quarters of the correction
        assert!(approx(light.position.x, -1.25));
        assert!(approx(heavy.position.x, 0.75));
        assert!(approx(heavy.position.x - light.position.x, 2.0));
    }

    #[test]
    fn test_resolution_separates_spheres() {
        let mut a = Body::new_sphere(Vec2::new(0.0, 0.0), 1.0);
        let mut b = Body::new_sphere(Vec2::new(1.0, 1.0), 1.0);

        resolve_sphere_sphere(&mut a, &mut b).unwrap();

        assert!(approx(a.position.distance(b.position), 2.0));
    }

    #[test]
    fn test_concentric_spheres_fail() {
        let mut a = Body::new_sphere(Vec2::ZERO, 1.0);
        let mut b = Body::new_sphere(Vec2::ZERO, 1.0);
        assert_eq!(resolve_sphere_sphere(&mut a, &mut b), Err(PhysicsError::ZeroLength));
    }
}
