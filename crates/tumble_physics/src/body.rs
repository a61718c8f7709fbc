//! Body types for 2D physics simulation

use crate::error::PhysicsError;
use crate::material::PhysicsMaterial;
use crate::shapes::{Aabb, Shape, ShapeKind, Sphere};
use slotmap::new_key_type;
use tumble_math::Vec2;

// Define generational key type for bodies
new_key_type! {
    /// Key to a body in the physics world
    ///
    /// Uses generational indexing so a key to a deleted body returns None
    /// instead of pointing at whatever reused its slot.
    pub struct BodyKey;
}

/// A 2D body with position, velocity, rotation and a collision shape
///
/// Mass, inverse mass and moment of inertia are derived from each other and
/// from the shape, so they are private and only change through
/// [`Body::set_mass`] and [`Body::set_shape`], which recompute all three.
#[derive(Clone, Debug)]
pub struct Body {
    /// Position in world space
    pub position: Vec2,
    /// Position before the most recent physics step
    pub prev_position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
    /// Current rotation in radians
    pub rotation: f32,
    /// Rotation speed in radians per second
    pub angular_velocity: f32,
    /// Friction and restitution used on contact
    pub material: PhysicsMaterial,
    /// Friction on the angular velocity (1.0 = none). Reserved, no resolver reads it yet.
    pub angular_friction: f32,
    /// Skip gravity and translation; the body becomes an immovable anchor
    pub fixed_position: bool,
    /// Declared for hosts, but the step does not read it: rotation always integrates
    pub fixed_rotation: bool,
    shape: Shape,
    mass: f32,
    inv_mass: f32,
    moment_of_inertia: f32,
    id: u64,
}

impl Body {
    fn with_shape(position: Vec2, shape: Shape) -> Self {
        let mut body = Self {
            position,
            prev_position: position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            material: PhysicsMaterial::default(),
            angular_friction: 1.0,
            fixed_position: false,
            fixed_rotation: false,
            shape,
            mass: 1.0,
            inv_mass: 1.0,
            moment_of_inertia: 0.0,
            id: 0,
        };
        body.recompute_derived();
        body
    }

    /// Create a zero-radius point
    pub fn new_point(position: Vec2) -> Self {
        Self::with_shape(position, Shape::Point)
    }

    /// Create a circle with the given radius
    pub fn new_sphere(position: Vec2, radius: f32) -> Self {
        Self::with_shape(position, Shape::Sphere(Sphere::new(radius)))
    }

    /// Create an axis-aligned box centered on `position`
    pub fn new_box(position: Vec2, width: f32, height: f32) -> Self {
        Self::with_shape(position, Shape::Box(Aabb::new(width, height)))
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the angular velocity of this body
    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the mass of this body
    pub fn with_mass(mut self, mass: f32) -> Result<Self, PhysicsError> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Set the contact material of this body
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set the friction (velocity retained on contact)
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.material.friction = friction.clamp(0.0, 1.0);
        self
    }

    /// Set the restitution (bounciness) of this body
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.material.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    /// Pin this body in place
    pub fn with_fixed_position(mut self, fixed: bool) -> Self {
        self.fixed_position = fixed;
        self
    }

    /// Flag this body as not rotating (see the field docs)
    pub fn with_fixed_rotation(mut self, fixed: bool) -> Self {
        self.fixed_rotation = fixed;
        self
    }

    /// Set the mass, recomputing inverse mass and moment of inertia together
    pub fn set_mass(&mut self, mass: f32) -> Result<(), PhysicsError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.mass = mass;
        self.recompute_derived();
        Ok(())
    }

    /// Replace the shape, recomputing the moment of inertia
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.recompute_derived();
    }

    /// Make this body a circle of the given radius
    pub fn set_radius(&mut self, radius: f32) {
        self.set_shape(Shape::Sphere(Sphere::new(radius)));
    }

    /// Make this body a box of the given size
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.set_shape(Shape::Box(Aabb::new(width, height)));
    }

    fn recompute_derived(&mut self) {
        self.inv_mass = 1.0 / self.mass;
        self.moment_of_inertia = self.shape.moment_of_inertia(self.mass);
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Radius for circles, zero for anything else
    pub fn radius(&self) -> f32 {
        match &self.shape {
            Shape::Sphere(s) => s.radius(),
            _ => 0.0,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    #[inline]
    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }

    /// Generational id assigned when the body was registered into a world
    ///
    /// Unregistered bodies report 0. Ids are only unique within one world.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Advance this body by one sub-step of `tick_scale` seconds
    pub(crate) fn integrate(&mut self, gravity: Vec2, tick_scale: f32) {
        self.prev_position = self.position;
        if !self.fixed_position {
            self.velocity += gravity * tick_scale;
            self.position += self.velocity * tick_scale;
        }
        self.rotation += self.angular_velocity * tick_scale;
    }
}
