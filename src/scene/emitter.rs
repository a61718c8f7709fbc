//! Steady stream of points fed into the obstacle group

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tumble_math::Vec2;
use tumble_physics::{Body, BodyKey, PhysicsWorld, Side};

use super::{SceneBounds, OBSTACLE_GROUP};

/// Spawns points along the top edge of the scene and removes them once they
/// leave it
///
/// Emission is rate based: fractional points carry over between frames, so
/// the long run count matches `points_per_second` at any frame rate.
pub struct PointEmitter {
    points_per_second: f32,
    /// Points owed but not yet spawned
    carry: f32,
    velocity: Vec2,
    bounds: SceneBounds,
    rng: StdRng,
    points: Vec<BodyKey>,
}

impl PointEmitter {
    pub fn new(points_per_second: f32, bounds: SceneBounds, seed: u64) -> Self {
        Self {
            points_per_second: points_per_second.max(0.0),
            carry: 0.0,
            velocity: Vec2::ZERO,
            bounds,
            rng: StdRng::seed_from_u64(seed),
            points: Vec::new(),
        }
    }

    /// Starting velocity of every spawned point
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Points currently alive, oldest first
    pub fn points(&self) -> &[BodyKey] {
        &self.points
    }

    /// Spawn the points owed for `dt` seconds, returning how many were added
    pub fn emit(&mut self, world: &mut PhysicsWorld, dt: f32) -> usize {
        if dt <= 0.0 {
            return 0;
        }
        self.carry += dt * self.points_per_second;
        let count = self.carry.floor();
        self.carry -= count;

        let half = self.bounds.half_extents();
        let count = count as usize;
        for _ in 0..count {
            let x = if half.x > 0.0 {
                self.rng.gen_range(-half.x..=half.x)
            } else {
                0.0
            };
            let point = Body::new_point(Vec2::new(x, -half.y)).with_velocity(self.velocity);
            let key = world.add_to_one_way_group(point, Side::From, OBSTACLE_GROUP);
            self.points.push(key);
        }
        count
    }

    /// Delete every emitted point outside the bounds, returning how many went
    pub fn cull(&mut self, world: &mut PhysicsWorld) -> usize {
        let before = self.points.len();
        let bounds = self.bounds;
        self.points.retain(|&key| {
            let inside = world.get(key).is_some_and(|p| bounds.contains(p.position));
            if !inside {
                world.delete(key);
            }
            inside
        });
        before - self.points.len()
    }
}
