//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for filling a physics world with randomly placed
//! spheres. Placement is driven by a seeded RNG so a seed always rebuilds the
//! same scene.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tumble_math::Vec2;
use tumble_physics::{
    find_single_intersection, Body, PhysicsConfig, PhysicsError, PhysicsMaterial, PhysicsWorld,
    Side,
};

use super::SceneBounds;

/// One-way group pairing moving bodies with fixed obstacles
pub const OBSTACLE_GROUP: &str = "obstacles";
/// All-group for free moving spheres
pub const PIT_GROUP: &str = "pit";

/// Mass given to fixed obstacles so contacts barely nudge them
const OBSTACLE_MASS: f32 = 1.0e6;
/// Placement attempts per requested sphere before giving up
const PLACEMENT_ATTEMPTS: usize = 50;
/// Largest angular velocity given to pit spheres, in radians per second
const MAX_SPIN: f32 = 0.1;

/// Builder for constructing physics scenes
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new(7, SceneBounds::new(40.0, 30.0))
///     .with_physics(PhysicsConfig::default())?
///     .add_fixed_spheres(8, 1.0, 3.0)?
///     .add_swarm(20, 0.5, 1.0, 4.0)?
///     .build();
/// ```
pub struct SceneBuilder {
    world: PhysicsWorld,
    bounds: SceneBounds,
    rng: StdRng,
    /// Every sphere placed so far, used to keep new spheres apart
    placed: Vec<Body>,
}

impl SceneBuilder {
    /// Create a new scene builder with a seeded RNG
    pub fn new(seed: u64, bounds: SceneBounds) -> Self {
        Self {
            world: PhysicsWorld::new(),
            bounds,
            rng: StdRng::seed_from_u64(seed),
            placed: Vec::new(),
        }
    }

    /// Replace the world with one using the given physics config
    ///
    /// Call this before adding bodies; bodies added earlier are dropped.
    pub fn with_physics(mut self, config: PhysicsConfig) -> Result<Self, PhysicsError> {
        self.world = PhysicsWorld::with_config(config)?;
        self.placed.clear();
        Ok(self)
    }

    fn random_radius(&mut self, min_radius: f32, max_radius: f32) -> f32 {
        let (lo, hi) = (min_radius.min(max_radius), min_radius.max(max_radius));
        // Skew towards small spheres
        lo + self.rng.gen::<f32>().powi(4) * (hi - lo)
    }

    fn random_velocity(&mut self, max_speed: f32) -> Vec2 {
        if max_speed <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.rng.gen_range(-max_speed..=max_speed),
            self.rng.gen_range(-max_speed..=max_speed),
        )
    }

    /// Find a spot for a sphere that overlaps nothing placed so far
    fn place_sphere(&mut self, min_radius: f32, max_radius: f32) -> Option<Body> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let radius = self.random_radius(min_radius, max_radius);
            let position = self.bounds.random_inside(&mut self.rng, radius);
            let sphere = Body::new_sphere(position, radius);
            if find_single_intersection(&sphere, &self.placed).is_none() {
                self.placed.push(sphere.clone());
                return Some(sphere);
            }
        }
        None
    }

    fn place_spheres(&mut self, count: usize, min_radius: f32, max_radius: f32) -> Vec<Body> {
        let spheres: Vec<Body> = (0..count)
            .map_while(|_| self.place_sphere(min_radius, max_radius))
            .collect();
        if spheres.len() < count {
            log::warn!(
                "Scene is too crowded: placed {} of {} spheres",
                spheres.len(),
                count
            );
        }
        spheres
    }

    /// Add free moving spheres that all collide with each other
    ///
    /// Mass grows with area and collisions are perfectly elastic.
    pub fn add_ball_pit(
        mut self,
        count: usize,
        min_radius: f32,
        max_radius: f32,
        max_speed: f32,
    ) -> Result<Self, PhysicsError> {
        for sphere in self.place_spheres(count, min_radius, max_radius) {
            let radius = sphere.radius();
            let velocity = self.random_velocity(max_speed);
            let mut sphere = sphere
                .with_velocity(velocity)
                .with_angular_velocity(self.rng.gen_range(-MAX_SPIN..=MAX_SPIN))
                .with_material(PhysicsMaterial::BOUNCY)
                .with_mass(std::f32::consts::PI * radius * radius)?;
            sphere.rotation = self.rng.gen_range(-std::f32::consts::PI..=std::f32::consts::PI);
            self.world.add_to_all_group(sphere, PIT_GROUP);
        }
        Ok(self)
    }

    /// Add fixed obstacle spheres on the struck side of the obstacle group
    pub fn add_fixed_spheres(
        mut self,
        count: usize,
        min_radius: f32,
        max_radius: f32,
    ) -> Result<Self, PhysicsError> {
        for sphere in self.place_spheres(count, min_radius, max_radius) {
            let sphere = sphere
                .with_fixed_position(true)
                .with_material(PhysicsMaterial::ROUGH)
                .with_mass(OBSTACLE_MASS)?;
            self.world.add_to_one_way_group(sphere, Side::To, OBSTACLE_GROUP);
        }
        Ok(self)
    }

    /// Add moving spheres that strike the fixed obstacles
    ///
    /// Swarm spheres pass through each other.
    pub fn add_swarm(
        mut self,
        count: usize,
        min_radius: f32,
        max_radius: f32,
        max_speed: f32,
    ) -> Result<Self, PhysicsError> {
        for sphere in self.place_spheres(count, min_radius, max_radius) {
            let radius = sphere.radius();
            let velocity = self.random_velocity(max_speed);
            let sphere = sphere
                .with_velocity(velocity)
                .with_mass(std::f32::consts::PI * radius * radius)?;
            self.world.add_to_one_way_group(sphere, Side::From, OBSTACLE_GROUP);
        }
        Ok(self)
    }

    /// Get the bounds bodies are placed within
    pub fn bounds(&self) -> SceneBounds {
        self.bounds
    }

    /// Build the scene and return the configured world
    pub fn build(self) -> PhysicsWorld {
        log::debug!("Built scene with {} bodies", self.world.len());
        self.world
    }
}
