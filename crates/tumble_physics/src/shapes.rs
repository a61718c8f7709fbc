//! Collision shapes for 2D physics
//!
//! Shapes carry only their size. Where a shape sits in the world is the
//! owning body's `position`, so moving a body never has to touch its shape.

use std::fmt;

use tumble_math::Vec2;

/// Tag identifying a shape variant, used to dispatch pair functions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Sphere,
    Box,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Box => "box",
        };
        f.write_str(name)
    }
}

/// A circle, keeping its squared radius cached for intersection tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: f32,
    radius_sq: f32,
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            radius_sq: radius * radius,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn radius_sq(&self) -> f32 {
        self.radius_sq
    }

    /// Check if a point is inside or on the circle centered at `center`
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        point.distance_squared(center) <= self.radius_sq
    }
}

/// An axis-aligned box of the given full width and height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half the size in each dimension
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Minimum corner when centered at `center`
    pub fn min(&self, center: Vec2) -> Vec2 {
        center - self.half_extents()
    }

    /// Maximum corner when centered at `center`
    pub fn max(&self, center: Vec2) -> Vec2 {
        center + self.half_extents()
    }

    /// Check if a point is inside or on the box centered at `center`
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let min = self.min(center);
        let max = self.max(center);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// Shape variants a body can take
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Zero-radius particle
    Point,
    Sphere(Sphere),
    Box(Aabb),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point => ShapeKind::Point,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Box(_) => ShapeKind::Box,
        }
    }

    /// Moment of inertia of this shape for the given mass
    ///
    /// Points have no extent and report zero.
    /// See <https://en.wikipedia.org/wiki/List_of_moments_of_inertia>.
    pub fn moment_of_inertia(&self, mass: f32) -> f32 {
        match self {
            Shape::Point => 0.0,
            Shape::Sphere(s) => 0.5 * mass * s.radius * s.radius,
            Shape::Box(b) => mass * (b.width * b.width + b.height * b.height) / 12.0,
        }
    }
}
