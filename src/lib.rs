pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, PhysicsWorld, SimulationConfig};
pub use crate::bodies::{RigidBody, RigidBodyType, RigidBodyHandle, Material, Friction, MassProperties};
pub use crate::collision::ContactManifold;
pub use crate::shapes::ConvexShape;
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid shape: {0}")]
        InvalidShape(String),

        #[error("Vertex index {index} out of range for shape with {count} vertices")]
        VertexIndexOutOfRange { index: usize, count: usize },

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
