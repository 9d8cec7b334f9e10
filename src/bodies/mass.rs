use crate::shapes::ConvexShape;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Mass and rotational inertia together with their cached inverses.
///
/// A non-positive mass or inertia is treated as infinite: its inverse is
/// zero and the body does not respond to forces or impulses on that axis.
/// An infinite mass also pins rotation, whatever inertia was given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    mass: f32,
    inv_mass: f32,
    inertia: f32,
    inv_inertia: f32,
}

#[inline]
fn inverse_or_zero(value: f32) -> f32 {
    if value > 0.0 && value.is_finite() {
        1.0 / value
    } else {
        0.0
    }
}

impl MassProperties {
    pub fn new(mass: f32, inertia: f32) -> Self {
        let mut properties = Self {
            mass,
            inv_mass: 0.0,
            inertia,
            inv_inertia: 0.0,
        };
        properties.update_inverses();
        properties
    }

    /// Mass properties of an immovable body
    pub fn infinite() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Derives mass from the shape's area and `density`, and inertia from
    /// the polygon's second moment of area
    pub fn from_shape(shape: &ConvexShape, density: f32) -> Self {
        let mass = shape.area() * density;
        Self::new(mass, shape.moment_of_inertia(mass))
    }

    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn get_inertia(&self) -> f32 {
        self.inertia
    }

    pub fn get_inverse_inertia(&self) -> f32 {
        self.inv_inertia
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.update_inverses();
    }

    pub fn set_inertia(&mut self, inertia: f32) {
        self.inertia = inertia;
        self.update_inverses();
    }

    fn update_inverses(&mut self) {
        self.inv_mass = inverse_or_zero(self.mass);
        self.inv_inertia = if self.inv_mass > 0.0 {
            inverse_or_zero(self.inertia)
        } else {
            0.0
        };
    }

    /// Returns true if the body cannot be moved by forces or impulses
    pub fn is_infinite(&self) -> bool {
        self.inv_mass == 0.0
    }
}
