use crate::bodies::{RigidBody, RigidBodyType};
use crate::integration::Integrator;
use crate::math::Vector2;

/// Symplectic Euler integrator (semi-implicit Euler).
///
/// The world calls [`integrate_forces`](Integrator::integrate_forces) for half
/// a step before and after moving the bodies, which keeps resting contacts
/// stable under gravity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate_forces(&self, body: &mut RigidBody, gravity: Vector2, dt: f32) {
        let inv_mass = body.get_inverse_mass();
        if inv_mass > 0.0 {
            let mut acceleration = body.get_force() * inv_mass;
            if body.is_affected_by_gravity() {
                acceleration += gravity;
            }
            body.set_linear_velocity(body.get_linear_velocity() + acceleration * dt);
        }

        let inv_inertia = body.get_inverse_inertia();
        if inv_inertia > 0.0 {
            body.set_angular_velocity(body.get_angular_velocity() + body.get_torque() * inv_inertia * dt);
        }
    }

    fn integrate_velocity(&self, body: &mut RigidBody, dt: f32) {
        if body.get_body_type() == RigidBodyType::Static {
            return;
        }

        body.set_position(body.get_position() + body.get_linear_velocity() * dt);
        body.set_rotation(body.get_rotation() + body.get_angular_velocity() * dt);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
