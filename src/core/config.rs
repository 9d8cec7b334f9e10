use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step of one sub-step, in seconds
    pub fixed_delta: f32,

    /// The maximum number of sub-steps a single `update` may run
    pub max_substeps: u32,

    /// Frame deltas above this are clamped before accumulation
    pub max_frame_delta: f32,

    /// Constant gravitational acceleration
    pub gravity: Vector2,

    /// The number of impulse passes over all manifolds per sub-step
    pub iterations: u32,

    /// Penetration depth tolerated before positional correction kicks in
    pub penetration_slop: f32,

    /// Fraction of the excess penetration removed per sub-step (Baumgarte factor)
    pub correction_factor: f32,

    /// Added to the resting threshold; contacts slower than one sub-step of
    /// gravity are treated as resting and do not bounce
    pub resting_epsilon: f32,

    /// Tangent impulses at or below this magnitude are skipped
    pub impulse_epsilon: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_delta: 1.0 / 60.0,
            max_substeps: 8,
            max_frame_delta: 0.25,
            gravity: Vector2::new(0.0, -9.81),
            iterations: 10,
            penetration_slop: 0.05,
            correction_factor: 0.4,
            resting_epsilon: 1.0e-4,
            impulse_epsilon: 1.0e-4,
        }
    }
}

impl SimulationConfig {
    /// Checks that every parameter is usable by the world
    pub fn validate(&self) -> Result<()> {
        if !(self.fixed_delta > 0.0 && self.fixed_delta.is_finite()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "fixed_delta must be positive, got {}",
                self.fixed_delta
            )));
        }

        if !(self.max_frame_delta > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "max_frame_delta must be positive, got {}",
                self.max_frame_delta
            )));
        }

        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter("max_substeps must be at least 1".into()));
        }

        if self.iterations == 0 {
            return Err(PhysicsError::InvalidParameter("iterations must be at least 1".into()));
        }

        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!("gravity must be finite, got {}", self.gravity)));
        }

        if !(self.penetration_slop >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "penetration_slop must be non-negative, got {}",
                self.penetration_slop
            )));
        }

        if !(0.0..=1.0).contains(&self.correction_factor) {
            return Err(PhysicsError::InvalidParameter(format!(
                "correction_factor must lie in [0, 1], got {}",
                self.correction_factor
            )));
        }

        if !(self.resting_epsilon >= 0.0 && self.impulse_epsilon >= 0.0) {
            return Err(PhysicsError::InvalidParameter("epsilons must be non-negative".into()));
        }

        Ok(())
    }
}
