mod rigid_body;
mod material;
mod mass;
mod body_type;

pub use self::rigid_body::{RigidBody, RigidBodyHandle};
pub use self::material::{Material, Friction};
pub use self::mass::MassProperties;
pub use self::body_type::RigidBodyType;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling the behavior of rigid bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BodyFlags: u32 {
            /// Body is affected by the world's gravity
            const AFFECTED_BY_GRAVITY = 0x01;

            /// Body generates collision events
            const GENERATE_COLLISION_EVENTS = 0x02;
        }
    }
}
