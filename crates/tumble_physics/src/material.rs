//! Physical material properties for collision response

use serde::{Deserialize, Serialize};

/// Physical material properties for collision response
///
/// Both values are retention factors in `[0, 1]`: a friction of 1.0 keeps all
/// velocity on contact and 0.0 stops the body dead, a restitution of 1.0 is a
/// perfectly elastic bounce and 0.0 no bounce at all.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Velocity kept on contact (1.0 = no loss, 0.0 = full loss)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 1.0,
            restitution: 0.5,
        }
    }
}

impl PhysicsMaterial {
    /// Perfectly elastic but loses a tenth of its speed on every contact,
    /// used for spheres that keep bouncing off each other
    pub const BOUNCY: Self = Self {
        friction: 0.9,
        restitution: 1.0,
    };

    /// Loses a tenth of its speed on every contact, used for the fixed
    /// obstacles points slide over
    pub const ROUGH: Self = Self {
        friction: 0.9,
        restitution: 0.5,
    };

    /// Create a new physics material with custom friction and restitution
    ///
    /// Values are clamped to the range [0.0, 1.0].
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Combine two materials for a contact
    ///
    /// The least bouncy and the most lossy surface wins.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            friction: self.friction.min(other.friction),
            restitution: self.restitution.min(other.restitution),
        }
    }
}
