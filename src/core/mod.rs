pub mod world;
pub mod config;
pub mod storage;
pub mod events;

pub use self::world::PhysicsWorld;
pub use self::config::SimulationConfig;
pub use self::storage::{BodyStorage, Storage};
pub use self::events::{EventQueue, CollisionEvent, BodyEvent, BodyEventType};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// Returns the raw id of the handle
    pub fn id(&self) -> u32 {
        self.0
    }
}
