use crate::core::{
    BodyEvent, BodyEventType, BodyHandle, BodyStorage, CollisionEvent, EventQueue, SimulationConfig,
};
use crate::core::storage::Storage;
use crate::bodies::RigidBody;
use crate::collision::{CollisionPair, ContactManifold};
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// The main physics world class that manages all bodies and runs the
/// fixed-timestep simulation.
///
/// Bodies are visited in registration order, which makes a run fully
/// deterministic for a given sequence of calls. The registry cannot change
/// while [`update`](Self::update) runs because `update` borrows the world
/// mutably for its whole duration.
#[derive(Debug)]
pub struct PhysicsWorld {
    /// All rigid bodies in the world
    bodies: BodyStorage<RigidBody>,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Integrator used for forces and positions
    integrator: SymplecticEulerIntegrator,

    /// Manifolds of the most recent sub-step
    manifolds: Vec<ContactManifold>,

    /// Queue of physics events
    events: EventQueue,

    /// Frame time not yet consumed by a sub-step
    accumulator: f32,

    /// The total elapsed simulation time
    time: f32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        let integrator = SymplecticEulerIntegrator::new();
        log::debug!("world using {} at {:.4}s per step", integrator.name(), config.fixed_delta);

        Self {
            bodies: BodyStorage::new(),
            config,
            integrator,
            manifolds: Vec::new(),
            events: EventQueue::new(),
            accumulator: 0.0,
            time: 0.0,
        }
    }

    /// Returns the total simulated time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Fraction of a sub-step left in the accumulator, for render interpolation
    pub fn get_alpha(&self) -> f32 {
        self.accumulator / self.config.fixed_delta
    }

    /// Sets the gravity for the simulation
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the configuration after validating it
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        log::debug!("added body {:?} ({} total)", handle, self.bodies.len());

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });

        handle
    }

    /// Removes a rigid body from the world and hands it back
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        let body = self
            .bodies
            .remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))?;

        self.manifolds.retain(|manifold| !manifold.get_pair().contains(handle));
        log::debug!("removed body {:?} ({} left)", handle, self.bodies.len());

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });

        Ok(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Iterates over all bodies in registration order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter()
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Manifolds retained by the most recent sub-step
    pub fn get_manifolds(&self) -> &[ContactManifold] {
        &self.manifolds
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Clears the world of all bodies and resets the clock
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.manifolds.clear();
        self.events.clear();
        self.accumulator = 0.0;
        self.time = 0.0;
    }

    /// Advances the simulation by a frame of `frame_delta` seconds.
    ///
    /// The delta is accumulated and consumed in sub-steps of
    /// `fixed_delta`. At most `max_substeps` sub-steps run per call; time
    /// left over once the cap is hit is dropped. Negative or NaN deltas are
    /// treated as zero. Returns the number of sub-steps executed.
    pub fn update(&mut self, frame_delta: f32) -> usize {
        self.events.clear();

        let frame_delta = if frame_delta.is_nan() || frame_delta < 0.0 {
            log::warn!("frame delta {} clamped to zero", frame_delta);
            0.0
        } else {
            frame_delta.min(self.config.max_frame_delta)
        };

        self.accumulator += frame_delta;

        let max_substeps = self.config.max_substeps as usize;
        let mut steps = 0;
        while self.accumulator >= self.config.fixed_delta {
            if steps >= max_substeps {
                log::warn!(
                    "sub-step cap of {} reached, dropping {:.4}s of simulation time",
                    max_substeps,
                    self.accumulator
                );
                self.accumulator = 0.0;
                break;
            }

            self.accumulator -= self.config.fixed_delta;
            self.step();
            steps += 1;
        }

        steps
    }

    /// Runs exactly one fixed sub-step, ignoring the accumulator
    pub fn step(&mut self) {
        let dt = self.config.fixed_delta;
        let half_dt = dt * 0.5;
        let gravity = self.config.gravity;

        self.collect_manifolds();

        for (_, body) in self.bodies.iter_mut() {
            self.integrator.integrate_forces(body, gravity, half_dt);
        }

        for _ in 0..self.config.iterations {
            for manifold in &self.manifolds {
                let pair = manifold.get_pair();
                if let Some((a, b)) = self.bodies.get_pair_mut(pair.body_a, pair.body_b) {
                    manifold.solve(a, b, &self.config);
                }
            }
        }

        for (_, body) in self.bodies.iter_mut() {
            self.integrator.integrate_velocity(body, dt);
            self.integrator.integrate_forces(body, gravity, half_dt);
        }

        for manifold in &self.manifolds {
            let pair = manifold.get_pair();
            if let Some((a, b)) = self.bodies.get_pair_mut(pair.body_a, pair.body_b) {
                manifold.correct(a, b, &self.config);
            }
        }

        for (_, body) in self.bodies.iter_mut() {
            body.clear_forces();
        }

        self.time += dt;
    }

    /// Rebuilds the manifold list for every unordered pair in registration order
    fn collect_manifolds(&mut self) {
        self.manifolds.clear();

        let entries: Vec<(BodyHandle, &RigidBody)> = self.bodies.iter().collect();
        for (i, &(handle_a, a)) in entries.iter().enumerate() {
            for &(handle_b, b) in &entries[i + 1..] {
                if a.get_inverse_mass() <= 0.0 && b.get_inverse_mass() <= 0.0 {
                    continue;
                }

                let pair = CollisionPair::new(handle_a, handle_b);
                let Some(mut manifold) = ContactManifold::generate(pair, a, b, &self.config) else {
                    continue;
                };
                manifold.initialize(a, b, &self.config);

                if a.generates_collision_events() && b.generates_collision_events() {
                    self.events.add_collision_event(CollisionEvent {
                        body_a: handle_a,
                        body_b: handle_b,
                        normal: manifold.get_normal(),
                        depth: manifold.get_depth(),
                        contacts: manifold.get_contacts().to_vec(),
                    });
                }

                self.manifolds.push(manifold);
            }
        }
    }
}
