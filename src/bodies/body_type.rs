/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigidBodyType {
    /// Dynamic bodies respond to gravity, forces and contact impulses
    #[default]
    Dynamic,

    /// Kinematic bodies move with the velocity they are given but ignore
    /// forces and impulses
    Kinematic,

    /// Static bodies never move
    Static,
}
