#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Material properties for physics objects
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Density of the material (kg/m^2 in 2D)
    pub density: f32,

    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,
}

impl Material {
    /// Creates a new material. Restitution is clamped to `[0, 1]`.
    pub fn new(density: f32, restitution: f32) -> Self {
        Self {
            density,
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Creates a material for ice (light, slightly bouncy)
    pub fn ice() -> Self {
        Self::new(0.9, 0.4)
    }

    /// Creates a material for rubber (medium density, high restitution)
    pub fn rubber() -> Self {
        Self::new(1.2, 0.8)
    }

    /// Creates a material for wood (light, low restitution)
    pub fn wood() -> Self {
        Self::new(0.7, 0.2)
    }

    /// Creates a material for metal (dense, medium restitution)
    pub fn metal() -> Self {
        Self::new(7.8, 0.05)
    }

    /// Creates a material for concrete (dense, almost no bounce)
    pub fn concrete() -> Self {
        Self::new(2.4, 0.1)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            restitution: 0.2,
        }
    }
}

/// Coulomb friction coefficients of a body
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Friction {
    /// Coefficient applied while the contact is sticking
    pub static_friction: f32,

    /// Coefficient applied once the contact slides
    pub dynamic_friction: f32,
}

impl Friction {
    /// Creates friction coefficients.
    ///
    /// Negative values are clamped to zero and the dynamic coefficient never
    /// exceeds the static one.
    pub fn new(static_friction: f32, dynamic_friction: f32) -> Self {
        let static_friction = static_friction.max(0.0);
        Self {
            static_friction,
            dynamic_friction: dynamic_friction.max(0.0).min(static_friction),
        }
    }

    /// No friction at all
    pub fn frictionless() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Geometric mean of two bodies' coefficients
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            static_friction: (self.static_friction * other.static_friction).sqrt(),
            dynamic_friction: (self.dynamic_friction * other.dynamic_friction).sqrt(),
        }
    }
}

impl Default for Friction {
    fn default() -> Self {
        Self {
            static_friction: 0.5,
            dynamic_friction: 0.3,
        }
    }
}
