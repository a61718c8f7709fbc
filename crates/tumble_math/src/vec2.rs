//! 2D Vector type

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a zero-length vector is normalized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tried to normalize a zero length vector")]
pub struct ZeroLengthError;

/// 2D Vector with x and y components
///
/// This is a plain `Copy` value: every operation returns a new vector on the
/// stack, so call sites never allocate and never share scratch state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared distance to another point
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Normalize to unit length
    ///
    /// A zero vector has no direction, so this fails instead of producing NaNs.
    #[inline]
    pub fn normalize(self) -> Result<Self, ZeroLengthError> {
        let len = self.length();
        if len == 0.0 {
            return Err(ZeroLengthError);
        }
        Ok(self / len)
    }

    /// Reflect this vector about a unit normal: `r = d - 2(d·n)n`
    ///
    /// `normal` must be unit length. A non-unit normal is not detected and
    /// gives a wrong result.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Rotate 90 degrees clockwise
    #[inline]
    pub fn perpendicular_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        // 1*3 + 2*4 = 11
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance_squared(Vec2::new(2.0, 3.0)), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vec2::new(3.0, 0.0).normalize().unwrap();
        assert!((n.x - 1.0).abs() < 0.0001);
        assert_eq!(n.y, 0.0);

        let n = Vec2::new(-1.0, -1.0).normalize().unwrap();
        assert!((n.length() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(Vec2::ZERO.normalize(), Err(ZeroLengthError));
    }

    #[test]
    fn test_reflect() {
        // Straight down onto a floor bounces straight up
        let r = Vec2::new(0.0, -2.0).reflect(Vec2::Y);
        assert_eq!(r, Vec2::new(0.0, 2.0));

        // Glancing hit keeps the tangent component
        let r = Vec2::new(1.0, -1.0).reflect(Vec2::Y);
        assert_eq!(r, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_perpendicular() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.perpendicular_cw(), Vec2::new(2.0, -1.0));
        assert_eq!(v.perpendicular_cw().dot(v), 0.0);
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, 7.0);
        assert_eq!(a + b, Vec2::new(6.0, 9.0));
        assert_eq!(b - a, Vec2::new(4.0, 5.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(2.5, 3.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        assert_eq!(c, Vec2::new(10.0, 14.0));
    }

    #[test]
    fn test_array_conversion() {
        let v: Vec2 = [1.5, -2.0].into();
        assert_eq!(v, Vec2::new(1.5, -2.0));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.5, -2.0]);
    }
}
