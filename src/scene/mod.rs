//! Scene construction utilities
//!
//! This module provides a declarative API for building physics scenes and
//! the rectangle those scenes live in.

mod emitter;
mod scene_builder;

pub use emitter::PointEmitter;
pub use scene_builder::{SceneBuilder, OBSTACLE_GROUP, PIT_GROUP};

use rand::Rng;
use tumble_math::Vec2;
use tumble_physics::{Body, PhysicsWorld};

/// Axis-aligned rectangle centered on the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBounds {
    half_extents: Vec2,
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_extents: Vec2::new(width.abs() / 2.0, height.abs() / 2.0),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extents.x && point.y.abs() <= self.half_extents.y
    }

    /// Random point at least `margin` away from every edge
    ///
    /// Falls back to the center on an axis too small for the margin.
    pub fn random_inside<R: Rng>(&self, rng: &mut R, margin: f32) -> Vec2 {
        let mut axis = |half: f32| {
            let room = half - margin;
            if room > 0.0 {
                rng.gen_range(-room..=room)
            } else {
                0.0
            }
        };
        let x = axis(self.half_extents.x);
        let y = axis(self.half_extents.y);
        Vec2::new(x, y)
    }

    /// Reflect a body heading out through an edge back inside
    ///
    /// Returns whether the body was turned around.
    pub fn bounce(&self, body: &mut Body) -> bool {
        let half = self.half_extents;
        let normal = if body.position.x < -half.x && body.velocity.x < 0.0 {
            Vec2::X
        } else if body.position.x > half.x && body.velocity.x > 0.0 {
            -Vec2::X
        } else if body.position.y < -half.y && body.velocity.y < 0.0 {
            Vec2::Y
        } else if body.position.y > half.y && body.velocity.y > 0.0 {
            -Vec2::Y
        } else {
            return false;
        };
        body.velocity = body.velocity.reflect(normal);
        true
    }

    /// Bounce every non-fixed body in `world` off the edges
    pub fn bounce_all(&self, world: &mut PhysicsWorld) -> usize {
        let keys: Vec<_> = world.keys().collect();
        let mut bounced = 0;
        for key in keys {
            if let Some(body) = world.get_mut(key) {
                if !body.fixed_position && self.bounce(body) {
                    bounced += 1;
                }
            }
        }
        bounced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_contains_edges() {
        let bounds = SceneBounds::new(4.0, 2.0);
        assert!(bounds.contains(Vec2::new(2.0, 1.0)));
        assert!(bounds.contains(Vec2::new(-2.0, -1.0)));
        assert!(!bounds.contains(Vec2::new(2.1, 0.0)));
        assert!(!bounds.contains(Vec2::new(0.0, -1.1)));
    }

    #[test]
    fn test_random_inside_respects_margin() {
        let bounds = SceneBounds::new(10.0, 6.0);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let p = bounds.random_inside(&mut rng, 1.0);
            assert!(p.x.abs() <= 4.0 && p.y.abs() <= 2.0);
        }
        assert_eq!(bounds.random_inside(&mut rng, 5.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_bounce_only_when_heading_out() {
        let bounds = SceneBounds::new(4.0, 4.0);
        let mut body = Body::new_sphere(Vec2::new(3.0, 0.0), 1.0).with_velocity(Vec2::new(2.0, 1.0));
        assert!(bounds.bounce(&mut body));
        assert_eq!(body.velocity, Vec2::new(-2.0, 1.0));
        // Already heading back in
        assert!(!bounds.bounce(&mut body));
    }

    #[test]
    fn test_bounce_all_skips_fixed_bodies() {
        let bounds = SceneBounds::new(4.0, 4.0);
        let mut world = PhysicsWorld::new();
        let moving = world.add_non_interacting(
            Body::new_point(Vec2::new(0.0, -3.0)).with_velocity(Vec2::new(0.0, -1.0)),
        );
        let fixed = world.add_non_interacting(
            Body::new_point(Vec2::new(0.0, -3.0))
                .with_velocity(Vec2::new(0.0, -1.0))
                .with_fixed_position(true),
        );

        assert_eq!(bounds.bounce_all(&mut world), 1);
        assert_eq!(world.get(moving).unwrap().velocity, Vec2::new(0.0, 1.0));
        assert_eq!(world.get(fixed).unwrap().velocity, Vec2::new(0.0, -1.0));
    }
}
