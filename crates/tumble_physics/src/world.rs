//! Physics world and simulation

use std::collections::HashSet;

use crate::body::{Body, BodyKey};
use crate::collision::{collide, intersects};
use crate::error::PhysicsError;
use crate::group::{AllGroup, InteractionGroups, OneWayGroup, Side};
use crate::integrator::IntegrationIterator;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use tumble_math::Vec2;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed ticks per simulated second
    pub ticks_per_second: f32,
    /// Gravity acceleration applied to every body that is not fixed in place
    pub gravity: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60.0,
            gravity: Vec2::ZERO,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config
    pub fn new(ticks_per_second: f32, gravity: Vec2) -> Self {
        Self {
            ticks_per_second,
            gravity,
        }
    }
}

/// The physics world owning every registered body
///
/// The world is single-threaded and steps synchronously: the host calls
/// [`PhysicsWorld::integrate`] once per frame with the elapsed time.
pub struct PhysicsWorld {
    /// Body storage (using generational keys)
    bodies: SlotMap<BodyKey, Body>,
    /// Registered bodies in registration order
    entities: Vec<BodyKey>,
    groups: InteractionGroups,
    /// Physics configuration
    pub config: PhysicsConfig,
    entity_generation: u64,
    tick: u64,
    /// Pair keys already reported by the running query, emptied per query
    reported_pairs: HashSet<u64>,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
            entities: Vec::new(),
            groups: InteractionGroups::default(),
            config: PhysicsConfig::default(),
            entity_generation: 0,
            tick: 0,
            reported_pairs: HashSet::new(),
        }
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        let tps = config.ticks_per_second;
        if !(tps > 0.0 && tps.is_finite()) {
            return Err(PhysicsError::InvalidTickRate(tps));
        }
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Create a world that starts out with `bodies` registered as non-interacting
    pub fn with_entities<I>(config: PhysicsConfig, bodies: I) -> Result<Self, PhysicsError>
    where
        I: IntoIterator<Item = Body>,
    {
        let mut world = Self::with_config(config)?;
        for body in bodies {
            world.add_non_interacting(body);
        }
        Ok(world)
    }

    fn register(&mut self, body: Body) -> BodyKey {
        let key = self.bodies.insert(body);
        let id = self.entity_generation;
        self.entity_generation += 1;
        self.bodies[key].set_id(id);
        self.entities.push(key);
        log::debug!("Registered {} with id {}", self.bodies[key].kind(), id);
        key
    }

    /// Add a body that moves with the simulation but never collides
    pub fn add_non_interacting(&mut self, body: Body) -> BodyKey {
        self.register(body)
    }

    /// Add a body to the named all-group, creating the group if needed
    ///
    /// Every member of an all-group is tested against every other member.
    pub fn add_to_all_group(&mut self, body: Body, group_name: &str) -> BodyKey {
        let key = self.register(body);
        self.groups.join_all(group_name, key);
        key
    }

    /// Add a body to one side of the named one-way group
    pub fn add_to_one_way_group(&mut self, body: Body, side: Side, group_name: &str) -> BodyKey {
        let key = self.register(body);
        self.groups.join_one_way(group_name, side, key);
        key
    }

    /// Put an already registered body into another all-group, keeping its id
    pub fn join_all_group(&mut self, key: BodyKey, group_name: &str) -> Result<(), PhysicsError> {
        if !self.bodies.contains_key(key) {
            return Err(PhysicsError::UnknownBody(key));
        }
        self.groups.join_all(group_name, key);
        Ok(())
    }

    /// Put an already registered body into one side of another one-way group
    pub fn join_one_way_group(
        &mut self,
        key: BodyKey,
        side: Side,
        group_name: &str,
    ) -> Result<(), PhysicsError> {
        if !self.bodies.contains_key(key) {
            return Err(PhysicsError::UnknownBody(key));
        }
        self.groups.join_one_way(group_name, side, key);
        Ok(())
    }

    /// Remove a body from the world and from every group, returning it
    ///
    /// The returned body keeps its fields, including its id.
    pub fn delete(&mut self, key: BodyKey) -> Option<Body> {
        let body = self.bodies.remove(key)?;
        self.entities.retain(|k| *k != key);
        self.groups.remove(key);
        log::debug!("Deleted {} with id {}", body.kind(), body.id());
        Some(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key)
    }

    /// Get the number of registered bodies
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether no bodies are registered
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Keys of all registered bodies in registration order
    pub fn keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.entities.iter().copied()
    }

    /// Iterate over all registered bodies in registration order
    pub fn iter(&self) -> impl Iterator<Item = (BodyKey, &Body)> + '_ {
        self.entities.iter().map(move |k| (*k, &self.bodies[*k]))
    }

    /// All interaction groups in creation order
    pub fn groups(&self) -> &InteractionGroups {
        &self.groups
    }

    /// Look up an all-group by name
    pub fn all_group(&self, name: &str) -> Option<&AllGroup> {
        self.groups.all_group(name)
    }

    /// Look up a one-way group by name
    pub fn one_way_group(&self, name: &str) -> Option<&OneWayGroup> {
        self.groups.one_way_group(name)
    }

    /// Number of physics ticks stepped so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The id the next registered body will receive
    pub fn entity_generation(&self) -> u64 {
        self.entity_generation
    }

    /// Gravity applied to every body that is not fixed in place
    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    /// Fixed ticks per simulated second
    pub fn ticks_per_second(&self) -> f32 {
        self.config.ticks_per_second
    }

    /// Step the simulation forward by `dt` seconds of frame time
    ///
    /// `dt` is cut into fixed ticks. Each tick:
    /// 1. Moves every body (gravity, velocity, rotation)
    /// 2. Resolves at most one contact per member of each all-group
    /// 3. Resolves at most one contact per `from` member of each one-way group
    ///
    /// The first error aborts the call. Bodies keep whatever state they had
    /// reached; there is no rollback.
    pub fn integrate(&mut self, dt: f32) -> Result<(), PhysicsError> {
        let steps = IntegrationIterator::new(self.config.ticks_per_second, dt)?;
        let gravity = self.config.gravity;

        for tick_scale in steps {
            self.tick += 1;
            log::trace!("Physics tick {} ({}s)", self.tick, tick_scale);

            for key in &self.entities {
                self.bodies[*key].integrate(gravity, tick_scale);
            }

            for group in self.groups.all() {
                for &key in group.members() {
                    Self::collision_step(&mut self.bodies, key, group.members())?;
                }
            }

            for group in self.groups.one_way() {
                for &key in group.from() {
                    Self::collision_step(&mut self.bodies, key, group.to())?;
                }
            }
        }

        Ok(())
    }

    /// Resolve the first contact between `key` and `candidates`, if any
    fn collision_step(
        bodies: &mut SlotMap<BodyKey, Body>,
        key: BodyKey,
        candidates: &[BodyKey],
    ) -> Result<(), PhysicsError> {
        let Some(partner) = Self::find_partner(bodies, key, candidates) else {
            return Ok(());
        };
        let [a, b] = bodies
            .get_disjoint_mut([key, partner])
            .ok_or(PhysicsError::UnknownBody(key))?;
        collide(a, b)
    }

    fn find_partner(
        bodies: &SlotMap<BodyKey, Body>,
        key: BodyKey,
        candidates: &[BodyKey],
    ) -> Option<BodyKey> {
        let body = bodies.get(key)?;
        candidates.iter().copied().find(|&other| {
            other != key && bodies.get(other).is_some_and(|b| intersects(body, b))
        })
    }

    /// Move `points` with gravity and velocity using this world's tick rate
    ///
    /// The bodies are not registered and never collide, which makes this a
    /// cheap way to run particle effects alongside the world.
    pub fn update_points(&self, dt: f32, points: &mut [Body]) -> Result<(), PhysicsError> {
        let gravity = self.config.gravity;
        for tick_scale in IntegrationIterator::new(self.config.ticks_per_second, dt)? {
            for point in points.iter_mut() {
                point.integrate(gravity, tick_scale);
            }
        }
        Ok(())
    }

    /// First registered body intersecting `body`, in registration order
    ///
    /// `body` does not need to be registered; a registered body never
    /// matches itself.
    pub fn first_intersecting(&self, body: &Body) -> Option<BodyKey> {
        self.iter()
            .find(|(_, other)| !std::ptr::eq(*other, body) && intersects(body, other))
            .map(|(key, _)| key)
    }

    /// Report every intersecting pair among all registered bodies
    ///
    /// Group membership is ignored. Each unordered pair is reported once per
    /// call, with the earlier registered body first. This is a one-shot
    /// query, not part of the stepped simulation.
    pub fn check_all_intersections<F>(&mut self, mut handle_intersection: F)
    where
        F: FnMut(&Body, &Body),
    {
        self.for_each_intersection(|_, a, _, b| handle_intersection(a, b));
    }

    /// Collect every intersecting pair of keys
    ///
    /// Allocates the result; prefer [`PhysicsWorld::check_all_intersections`]
    /// in per-frame code.
    pub fn gc_heavy_check_all_intersections(&mut self) -> Vec<(BodyKey, BodyKey)> {
        let mut intersections = Vec::new();
        self.for_each_intersection(|ka, _, kb, _| intersections.push((ka, kb)));
        intersections
    }

    fn for_each_intersection<F>(&mut self, mut handle: F)
    where
        F: FnMut(BodyKey, &Body, BodyKey, &Body),
    {
        self.reported_pairs.clear();
        let generation = self.entity_generation;

        for &ka in &self.entities {
            let a = &self.bodies[ka];
            for &kb in &self.entities {
                if ka == kb {
                    continue;
                }
                let b = &self.bodies[kb];
                // Symmetric key so (a, b) and (b, a) land on the same slot
                let (lo, hi) = if a.id() < b.id() {
                    (a.id(), b.id())
                } else {
                    (b.id(), a.id())
                };
                let pair = lo * generation + hi;

                if self.reported_pairs.contains(&pair) {
                    continue;
                }
                if intersects(a, b) {
                    self.reported_pairs.insert(pair);
                    handle(ka, a, kb, b);
                }
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
