use crate::bodies::RigidBody;
use crate::math::Vector2;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances velocities by the accumulated force, torque and `gravity` over `dt`
    fn integrate_forces(&self, body: &mut RigidBody, gravity: Vector2, dt: f32);

    /// Advances position and rotation by the current velocities over `dt`
    fn integrate_velocity(&self, body: &mut RigidBody, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
