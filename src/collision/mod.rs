mod collision_pair;
mod contact_manifold;
pub mod contact_generator;
pub mod sat;

pub use self::collision_pair::CollisionPair;
pub use self::contact_generator::{clip_contacts, ContactClip, ReferenceSide};
pub use self::contact_manifold::{ContactManifold, MAX_CONTACT_POINTS};
