use crate::bodies::{body_flags::BodyFlags, Friction, MassProperties, Material, RigidBodyType};
use crate::core::BodyHandle;
use crate::math::Vector2;
use crate::shapes::ConvexShape;

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// A rigid body for physics simulation.
///
/// The body exclusively owns its [`ConvexShape`]; the shape's position and
/// rotation are the body's position and rotation. Cloning a body deep-copies
/// the shape.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's collision shape, which also carries its transform
    shape: ConvexShape,

    /// The body's type (dynamic, kinematic, or static)
    body_type: RigidBodyType,

    /// The body's material properties
    material: Material,

    /// Mass, inertia and their inverses
    mass: MassProperties,

    /// Friction coefficients
    friction: Friction,

    /// Linear velocity in units per second
    velocity: Vector2,

    /// Angular velocity in radians per second
    angular_velocity: f32,

    /// Force accumulated since the last `clear_forces`
    force: Vector2,

    /// Torque accumulated since the last `clear_forces`
    torque: f32,

    /// The body's flags
    flags: BodyFlags,
}

impl RigidBody {
    /// Creates a dynamic body. A non-positive mass or inertia makes the body
    /// immovable on that axis.
    pub fn new(shape: ConvexShape, material: Material, mass: MassProperties, friction: Friction) -> Self {
        Self::with_type(shape, material, mass, friction, RigidBodyType::Dynamic)
    }

    /// Creates a dynamic body whose mass and inertia follow from the shape's
    /// area and the material's density
    pub fn from_density(shape: ConvexShape, material: Material, friction: Friction) -> Self {
        let mass = MassProperties::from_shape(&shape, material.density);
        Self::new(shape, material, mass, friction)
    }

    /// Creates a static body that never moves
    pub fn new_static(shape: ConvexShape, material: Material, friction: Friction) -> Self {
        Self::with_type(shape, material, MassProperties::infinite(), friction, RigidBodyType::Static)
    }

    /// Creates a kinematic body, moved only by the velocity it is given
    pub fn new_kinematic(shape: ConvexShape, material: Material, friction: Friction) -> Self {
        Self::with_type(shape, material, MassProperties::infinite(), friction, RigidBodyType::Kinematic)
    }

    fn with_type(
        shape: ConvexShape,
        material: Material,
        mass: MassProperties,
        friction: Friction,
        body_type: RigidBodyType,
    ) -> Self {
        let mass = match body_type {
            RigidBodyType::Dynamic => mass,
            RigidBodyType::Kinematic | RigidBodyType::Static => MassProperties::infinite(),
        };

        Self {
            shape,
            body_type,
            material,
            mass,
            friction,
            velocity: Vector2::zero(),
            angular_velocity: 0.0,
            force: Vector2::zero(),
            torque: 0.0,
            flags: BodyFlags::AFFECTED_BY_GRAVITY | BodyFlags::GENERATE_COLLISION_EVENTS,
        }
    }

    /// Returns the body's shape
    pub fn get_shape(&self) -> &ConvexShape {
        &self.shape
    }

    /// Returns the body's shape for direct manipulation
    pub fn get_shape_mut(&mut self) -> &mut ConvexShape {
        &mut self.shape
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Returns the body's mass properties
    pub fn get_mass_properties(&self) -> &MassProperties {
        &self.mass
    }

    pub fn get_mass(&self) -> f32 {
        self.mass.get_mass()
    }

    pub fn get_inverse_mass(&self) -> f32 {
        self.mass.get_inverse_mass()
    }

    pub fn get_inverse_inertia(&self) -> f32 {
        self.mass.get_inverse_inertia()
    }

    /// Returns the body's friction coefficients
    pub fn get_friction(&self) -> &Friction {
        &self.friction
    }

    /// Returns true if impulses and forces can change this body's velocity
    pub fn is_movable(&self) -> bool {
        self.mass.get_inverse_mass() > 0.0
    }

    /// Position of the underlying shape
    pub fn get_position(&self) -> Vector2 {
        self.shape.get_position()
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.shape.set_position(position);
    }

    /// Rotation of the underlying shape in radians
    pub fn get_rotation(&self) -> f32 {
        self.shape.get_rotation()
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.shape.set_rotation(rotation);
    }

    /// World-space center of mass, taken to be the shape's center
    pub fn get_center(&self) -> Vector2 {
        self.shape.get_center()
    }

    pub fn get_linear_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the linear velocity. Ignored for static bodies.
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        if self.body_type != RigidBodyType::Static {
            self.velocity = velocity;
        }
    }

    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the angular velocity. Ignored for static bodies.
    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        if self.body_type != RigidBodyType::Static {
            self.angular_velocity = angular_velocity;
        }
    }

    /// Velocity of a point at `offset` from the center: `v + w x r`
    pub fn velocity_at(&self, offset: Vector2) -> Vector2 {
        self.velocity + Vector2::cross_scalar(self.angular_velocity, &offset)
    }

    /// Accumulated force since the last clear
    pub fn get_force(&self) -> Vector2 {
        self.force
    }

    /// Accumulated torque since the last clear
    pub fn get_torque(&self) -> f32 {
        self.torque
    }

    /// Adds a force at the center of mass. It persists until [`clear_forces`](Self::clear_forces).
    pub fn apply_force(&mut self, force: Vector2) {
        self.force += force;
    }

    /// Adds a torque. It persists until [`clear_forces`](Self::clear_forces).
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Applies an instantaneous impulse at `contact_offset` from the center
    pub fn apply_impulse(&mut self, impulse: Vector2, contact_offset: Vector2) {
        self.velocity += impulse * self.mass.get_inverse_mass();
        self.angular_velocity += self.mass.get_inverse_inertia() * contact_offset.cross(&impulse);
    }

    /// Resets the force and torque accumulators
    pub fn clear_forces(&mut self) {
        self.force = Vector2::zero();
        self.torque = 0.0;
    }

    /// Returns whether the body is affected by gravity
    pub fn is_affected_by_gravity(&self) -> bool {
        self.flags.contains(BodyFlags::AFFECTED_BY_GRAVITY)
    }

    /// Sets whether the body is affected by gravity
    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.flags.set(BodyFlags::AFFECTED_BY_GRAVITY, affected);
    }

    /// Returns whether the body generates collision events
    pub fn generates_collision_events(&self) -> bool {
        self.flags.contains(BodyFlags::GENERATE_COLLISION_EVENTS)
    }

    /// Sets whether the body generates collision events
    pub fn set_generates_collision_events(&mut self, generates: bool) {
        self.flags.set(BodyFlags::GENERATE_COLLISION_EVENTS, generates);
    }
}
