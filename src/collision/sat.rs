//! Separating-axis helpers shared by shape queries and contact generation.

use crate::math::Vector2;

/// Projects a vertex set onto an axis and returns the `(min, max)` interval
pub fn project_onto_axis(axis: &Vector2, vertices: &[Vector2]) -> (f32, f32) {
    vertices.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), vertex| {
        let projection = axis.dot(vertex);
        (min.min(projection), max.max(projection))
    })
}

/// Returns the overlap width of two vertex sets along `axis`, or `None` if
/// the axis separates them
pub fn axis_overlap(axis: &Vector2, a: &[Vector2], b: &[Vector2]) -> Option<f32> {
    let (min_a, max_a) = project_onto_axis(axis, a);
    let (min_b, max_b) = project_onto_axis(axis, b);

    if min_b > max_a || min_a > max_b {
        return None;
    }

    Some((max_a - min_b).min(max_b - min_a))
}

/// Twice the signed area of a polygon (positive for counter-clockwise winding)
pub fn signed_area_doubled(vertices: &[Vector2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(&vertices[(i + 1) % n]))
        .sum()
}

/// Returns `1.0` for counter-clockwise (or degenerate) winding and `-1.0`
/// for clockwise winding
pub fn winding_sign(vertices: &[Vector2]) -> f32 {
    if signed_area_doubled(vertices) < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Computes one outward unit normal per edge.
///
/// Index `i` holds the normal of the edge from vertex `i` to vertex
/// `(i + 1) % n`. Zero-length edges produce a zero vector, which callers
/// must skip as an axis.
pub fn projection_axes(vertices: &[Vector2], winding: f32) -> Vec<Vector2> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let edge = vertices[(i + 1) % n] - vertices[i];
            match edge.try_normalize() {
                Some(direction) => Vector2::new(direction.y, -direction.x) * winding,
                None => Vector2::zero(),
            }
        })
        .collect()
}
