//! Contact point generation by reference/incident edge clipping.

use crate::math::{Vector2, EPSILON};
use crate::shapes::ConvexShape;

/// Incident points further than this in front of the reference face are dropped
pub const CONTACT_TOLERANCE: f32 = 1.0e-4;

/// Relative bias that keeps the reference face on shape A when both
/// candidates are nearly equally aligned with the normal
const REFERENCE_BIAS_RELATIVE: f32 = 0.95;
const REFERENCE_BIAS_ABSOLUTE: f32 = 0.01;

/// Which shape supplied the reference face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSide {
    A,
    B,
}

/// The result of clipping two shapes against each other
#[derive(Debug, Clone, PartialEq)]
pub struct ContactClip {
    /// World-space contact points, at most two
    pub points: Vec<Vector2>,

    /// The shape whose edge served as the reference face
    pub reference: ReferenceSide,
}

impl ContactClip {
    fn empty(reference: ReferenceSide) -> Self {
        Self { points: Vec::new(), reference }
    }
}

/// Computes the contact points of two overlapping shapes.
///
/// `normal` is the unit collision normal pointing from `shape_a` toward
/// `shape_b`. The reference face is the edge of A most aligned with `normal`
/// or the edge of B most aligned with `-normal`, whichever matches better.
/// The incident face is the edge of the other shape most anti-parallel to
/// the reference face. The incident edge is clipped to the reference edge's
/// side planes and only points at or behind the reference face are kept.
///
/// Uses the shapes' cached world geometry; nothing is mutated.
pub fn clip_contacts(shape_a: &ConvexShape, shape_b: &ConvexShape, normal: Vector2) -> ContactClip {
    let face_a = most_aligned_edge(shape_a.get_edge_normals(), normal);
    let face_b = most_aligned_edge(shape_b.get_edge_normals(), -normal);

    let (reference_shape, incident_shape, reference_index, reference) = match (face_a, face_b) {
        (Some((index_a, dot_a)), Some((index_b, dot_b))) => {
            if bias_greater_than(dot_a, dot_b) {
                (shape_a, shape_b, index_a, ReferenceSide::A)
            } else {
                (shape_b, shape_a, index_b, ReferenceSide::B)
            }
        }
        (Some((index_a, _)), None) => (shape_a, shape_b, index_a, ReferenceSide::A),
        (None, Some((index_b, _))) => (shape_b, shape_a, index_b, ReferenceSide::B),
        (None, None) => return ContactClip::empty(ReferenceSide::A),
    };

    let reference_normal = reference_shape.get_edge_normals()[reference_index];
    let Some((mut incident_0, mut incident_1)) = incident_edge(incident_shape, reference_normal) else {
        return ContactClip::empty(reference);
    };

    let reference_vertices = reference_shape.get_world_vertices();
    let v1 = reference_vertices[reference_index];
    let v2 = reference_vertices[(reference_index + 1) % reference_vertices.len()];

    let Some(side) = (v2 - v1).try_normalize() else {
        return ContactClip::empty(reference);
    };

    // Clip the incident edge to the slab between the reference edge's end points
    if clip_segment(-side, -side.dot(&v1), &mut incident_0, &mut incident_1) == 0 {
        return ContactClip::empty(reference);
    }
    if clip_segment(side, side.dot(&v2), &mut incident_0, &mut incident_1) == 0 {
        return ContactClip::empty(reference);
    }

    let reference_offset = reference_normal.dot(&v1);
    let mut points: Vec<Vector2> = Vec::with_capacity(2);
    for point in [incident_0, incident_1] {
        let separation = reference_normal.dot(&point) - reference_offset;
        let duplicate = points.iter().any(|kept| kept.distance_squared(&point) < EPSILON * EPSILON);
        if separation <= CONTACT_TOLERANCE && !duplicate {
            points.push(point);
        }
    }

    ContactClip { points, reference }
}

/// Index and alignment of the edge whose normal best matches `direction`
fn most_aligned_edge(normals: &[Vector2], direction: Vector2) -> Option<(usize, f32)> {
    normals
        .iter()
        .enumerate()
        .filter(|(_, normal)| !normal.is_zero())
        .map(|(index, normal)| (index, normal.dot(&direction)))
        .fold(None, |best: Option<(usize, f32)>, candidate| match best {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        })
}

/// End points of the edge of `shape` most anti-parallel to `reference_normal`
fn incident_edge(shape: &ConvexShape, reference_normal: Vector2) -> Option<(Vector2, Vector2)> {
    let (index, _) = most_aligned_edge(shape.get_edge_normals(), -reference_normal)?;
    let vertices = shape.get_world_vertices();
    Some((vertices[index], vertices[(index + 1) % vertices.len()]))
}

fn bias_greater_than(a: f32, b: f32) -> bool {
    a >= b * REFERENCE_BIAS_RELATIVE + a * REFERENCE_BIAS_ABSOLUTE
}

/// Clips the segment `face_0..face_1` to the half plane `normal . p <= offset`.
///
/// Returns how many points survive. Surviving points are written back into
/// `face_0` and `face_1`; a single survivor is written to both.
fn clip_segment(normal: Vector2, offset: f32, face_0: &mut Vector2, face_1: &mut Vector2) -> usize {
    let mut out = [*face_0, *face_1];
    let mut count = 0;

    let distance_0 = normal.dot(face_0) - offset;
    let distance_1 = normal.dot(face_1) - offset;

    if distance_0 <= 0.0 {
        out[count] = *face_0;
        count += 1;
    }
    if distance_1 <= 0.0 {
        out[count] = *face_1;
        count += 1;
    }

    if distance_0 * distance_1 < 0.0 && count < 2 {
        let alpha = distance_0 / (distance_0 - distance_1);
        out[count] = *face_0 + (*face_1 - *face_0) * alpha;
        count += 1;
    }

    if count == 1 {
        out[1] = out[0];
    }

    *face_0 = out[0];
    *face_1 = out[1];
    count
}
