use crate::bodies::{Friction, RigidBody};
use crate::collision::collision_pair::CollisionPair;
use crate::collision::contact_generator::{self, ReferenceSide};
use crate::core::SimulationConfig;
use crate::math::Vector2;

/// Maximum number of contact points stored in a manifold
pub const MAX_CONTACT_POINTS: usize = 2;

/// The contact state of one colliding body pair for one sub-step.
///
/// A manifold goes through `generate`, `initialize`, `solve` (once per
/// solver iteration) and `correct`, and is then dropped. The normal points
/// from body A toward body B, so positive impulses along it push B away
/// from A.
#[derive(Debug, Clone)]
pub struct ContactManifold {
    /// The collision pair this manifold belongs to
    pair: CollisionPair,

    /// Unit normal pointing from A toward B
    normal: Vector2,

    /// Penetration depth along the normal
    depth: f32,

    /// World-space contact points
    contacts: Vec<Vector2>,

    /// Which body supplied the reference face during clipping
    reference: ReferenceSide,

    /// Combined restitution, zeroed for resting contacts
    restitution: f32,

    /// Combined friction coefficients
    friction: Friction,
}

impl ContactManifold {
    /// Detects a collision between `a` and `b` and builds its contact set.
    ///
    /// Returns `None` when the pair cannot interact (both bodies immovable),
    /// when the shapes are separated after sweeping A by the relative
    /// displacement of one sub-step, or when clipping yields no contact point.
    /// Clipping works on the current geometry, so a pair that is still apart
    /// this sub-step produces no manifold.
    pub fn generate(
        pair: CollisionPair,
        a: &RigidBody,
        b: &RigidBody,
        config: &SimulationConfig,
    ) -> Option<Self> {
        if a.get_inverse_mass() + b.get_inverse_mass() <= 0.0 {
            return None;
        }

        let sweep = (a.get_linear_velocity() - b.get_linear_velocity()) * config.fixed_delta;
        let swept_mtv = a.get_shape().intersect(b.get_shape(), sweep)?;

        // Depth and normal come from the current overlap; the swept query
        // only gates the pair. Shapes that merely touch keep the swept normal.
        let current_mtv = a.get_shape().intersect(b.get_shape(), Vector2::zero());
        let mtv = current_mtv.unwrap_or(swept_mtv);
        let depth = current_mtv.map_or(0.0, |mtv| mtv.length());

        // The translation vector pushes A away from B
        let normal = (-mtv).try_normalize()?;

        let clip = contact_generator::clip_contacts(a.get_shape(), b.get_shape(), normal);
        log::trace!(
            "pair {:?}/{:?}: depth {:.5}, normal {}, {} contact(s)",
            pair.body_a,
            pair.body_b,
            depth,
            normal,
            clip.points.len()
        );

        if clip.points.is_empty() {
            return None;
        }

        let mut contacts = clip.points;
        contacts.truncate(MAX_CONTACT_POINTS);

        Some(Self {
            pair,
            normal,
            depth,
            contacts,
            reference: clip.reference,
            restitution: 0.0,
            friction: Friction::frictionless(),
        })
    }

    /// Combines the material coefficients of both bodies.
    ///
    /// Restitution is the smaller of the two. It is dropped to zero when any
    /// contact closes no faster than gravity alone would make it over one
    /// sub-step, so bodies resting under gravity do not bounce.
    pub fn initialize(&mut self, a: &RigidBody, b: &RigidBody, config: &SimulationConfig) {
        self.restitution = a.get_material().restitution.min(b.get_material().restitution);
        self.friction = a.get_friction().combine(b.get_friction());

        let resting_speed_squared = (config.gravity * config.fixed_delta).length_squared() + config.resting_epsilon;
        let center_a = a.get_center();
        let center_b = b.get_center();

        let resting = self.contacts.iter().any(|contact| {
            let relative = b.velocity_at(*contact - center_b) - a.velocity_at(*contact - center_a);
            relative.length_squared() < resting_speed_squared
        });

        if resting {
            self.restitution = 0.0;
        }
    }

    /// Runs one impulse pass over the manifold.
    ///
    /// Every contact's impulse is computed from the same velocities and
    /// scaled by the contact count, then all are applied together. A
    /// symmetric pair of contacts therefore adds no spurious spin.
    pub fn solve(&self, a: &mut RigidBody, b: &mut RigidBody, config: &SimulationConfig) {
        let inv_mass_a = a.get_inverse_mass();
        let inv_mass_b = b.get_inverse_mass();
        if inv_mass_a + inv_mass_b <= 0.0 {
            return;
        }

        let inv_inertia_a = a.get_inverse_inertia();
        let inv_inertia_b = b.get_inverse_inertia();
        let center_a = a.get_center();
        let center_b = b.get_center();
        let count = self.contacts.len() as f32;
        let normal = self.normal;

        let effective_mass = |r_a: Vector2, r_b: Vector2, direction: Vector2| {
            let r_a_cross = r_a.cross(&direction);
            let r_b_cross = r_b.cross(&direction);
            inv_mass_a
                + inv_mass_b
                + r_a_cross * r_a_cross * inv_inertia_a
                + r_b_cross * r_b_cross * inv_inertia_b
        };

        let normal_impulses: Vec<(Vector2, Vector2, f32)> = self
            .contacts
            .iter()
            .filter_map(|contact| {
                let r_a = *contact - center_a;
                let r_b = *contact - center_b;

                let relative = b.velocity_at(r_b) - a.velocity_at(r_a);
                let normal_speed = relative.dot(&normal);

                // Separating
                if normal_speed > 0.0 {
                    return None;
                }

                let normal_mass = effective_mass(r_a, r_b, normal);
                if normal_mass <= 0.0 {
                    return None;
                }

                let j = -(1.0 + self.restitution) * normal_speed / normal_mass / count;
                Some((r_a, r_b, j))
            })
            .collect();

        for &(r_a, r_b, j) in &normal_impulses {
            let impulse = normal * j;
            a.apply_impulse(-impulse, r_a);
            b.apply_impulse(impulse, r_b);
        }

        // Friction acts against the sliding direction left after the normal impulses
        let friction_impulses: Vec<(Vector2, Vector2, Vector2)> = normal_impulses
            .iter()
            .filter_map(|&(r_a, r_b, j)| {
                let relative = b.velocity_at(r_b) - a.velocity_at(r_a);
                let tangent = (relative - normal * relative.dot(&normal)).try_normalize()?;

                let tangent_mass = effective_mass(r_a, r_b, tangent);
                if tangent_mass <= 0.0 {
                    return None;
                }

                let jt = -relative.dot(&tangent) / tangent_mass / count;
                if jt.abs() <= config.impulse_epsilon {
                    return None;
                }

                // Coulomb cone: stick below the static limit, slide at the dynamic one
                let impulse = if jt.abs() < j * self.friction.static_friction {
                    tangent * jt
                } else {
                    tangent * (-j * self.friction.dynamic_friction)
                };
                Some((r_a, r_b, impulse))
            })
            .collect();

        for &(r_a, r_b, impulse) in &friction_impulses {
            a.apply_impulse(-impulse, r_a);
            b.apply_impulse(impulse, r_b);
        }
    }

    /// Pushes the bodies apart by a fraction of the penetration beyond the slop
    pub fn correct(&self, a: &mut RigidBody, b: &mut RigidBody, config: &SimulationConfig) {
        let inv_mass_a = a.get_inverse_mass();
        let inv_mass_b = b.get_inverse_mass();
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum <= 0.0 {
            return;
        }

        let excess = (self.depth - config.penetration_slop).max(0.0);
        let correction = self.normal * (excess / inv_mass_sum * config.correction_factor);

        a.set_position(a.get_position() - correction * inv_mass_a);
        b.set_position(b.get_position() + correction * inv_mass_b);
    }

    /// Returns the collision pair
    pub fn get_pair(&self) -> CollisionPair {
        self.pair
    }

    /// Unit normal pointing from body A toward body B
    pub fn get_normal(&self) -> Vector2 {
        self.normal
    }

    /// Penetration depth at detection time
    pub fn get_depth(&self) -> f32 {
        self.depth
    }

    /// World-space contact points
    pub fn get_contacts(&self) -> &[Vector2] {
        &self.contacts
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// The body whose edge was used as the clipping reference
    pub fn get_reference(&self) -> ReferenceSide {
        self.reference
    }

    /// Combined restitution after the resting-contact check
    pub fn get_restitution(&self) -> f32 {
        self.restitution
    }

    pub fn get_static_friction(&self) -> f32 {
        self.friction.static_friction
    }

    pub fn get_dynamic_friction(&self) -> f32 {
        self.friction.dynamic_friction
    }
}
