use crate::collision::sat;
use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2, EPSILON};
use crate::Result;

/// Fraction by which SAT overlap widths are inflated before picking the
/// minimum translation vector. Keeps shapes from sticking at exact contact.
pub const MTV_MARGIN: f32 = 0.01;

/// A convex polygon with a world transform and cached world-space geometry.
///
/// Vertices are stored in local space. The shape is rotated about its
/// [`pivot`](Self::pivot) (the vertex centroid plus `rotation_offset`) and
/// translated by `position + offset`. World vertices, edge normals and the
/// bounding rectangle are cached and rebuilt whenever the transform moves by
/// more than [`EPSILON`].
#[derive(Debug, Clone)]
pub struct ConvexShape {
    vertices: Vec<Vector2>,
    position: Vector2,
    offset: Vector2,
    rotation: f32,
    rotation_offset: Vector2,

    /// Arithmetic mean of the local vertices
    origin: Vector2,

    /// `1.0` for counter-clockwise local winding, `-1.0` for clockwise
    winding: f32,

    world_vertices: Vec<Vector2>,
    edge_normals: Vec<Vector2>,
    bounds: Aabb,

    cache_translation: Vector2,
    cache_rotation: f32,

    is_static: bool,
}

impl Default for ConvexShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexShape {
    /// Creates an empty shape. It has no vertices until [`set_shape`](Self::set_shape) succeeds.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            position: Vector2::zero(),
            offset: Vector2::zero(),
            rotation: 0.0,
            rotation_offset: Vector2::zero(),
            origin: Vector2::zero(),
            winding: 1.0,
            world_vertices: Vec::new(),
            edge_normals: Vec::new(),
            bounds: Aabb::default(),
            cache_translation: Vector2::zero(),
            cache_rotation: 0.0,
            is_static: true,
        }
    }

    /// Creates a static shape from the given vertices
    pub fn from_vertices(vertices: &[Vector2]) -> Result<Self> {
        let mut shape = Self::new();
        shape.set_shape(vertices, true)?;
        Ok(shape)
    }

    /// Creates an axis-aligned rectangle with its first corner at the local origin
    pub fn rectangle(width: f32, height: f32) -> Self {
        let mut shape = Self::new();
        shape.assign_vertices(
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(width, 0.0),
                Vector2::new(width, height),
                Vector2::new(0.0, height),
            ],
            true,
        );
        shape
    }

    /// Replaces the vertex data of the shape.
    ///
    /// Fails without touching the current state if fewer than two vertices are
    /// supplied. `is_static` marks shapes whose edge normals other shapes may
    /// reuse from the cache instead of recomputing them.
    pub fn set_shape(&mut self, vertices: &[Vector2], is_static: bool) -> Result<()> {
        if vertices.len() < 2 {
            log::debug!("rejected shape with {} vertices", vertices.len());
            return Err(PhysicsError::InvalidShape(format!(
                "a shape needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }

        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(PhysicsError::InvalidShape(format!("non-finite vertex {}", bad)));
        }

        self.assign_vertices(vertices.to_vec(), is_static);
        Ok(())
    }

    /// Replaces a single vertex.
    ///
    /// The centroid origin is left as computed by the last `set_shape`; the
    /// world caches are rebuilt.
    pub fn set_vertex(&mut self, index: usize, vertex: Vector2) -> Result<()> {
        if !vertex.is_finite() {
            return Err(PhysicsError::InvalidShape(format!("non-finite vertex {}", vertex)));
        }

        let count = self.vertices.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(PhysicsError::VertexIndexOutOfRange { index, count })?;

        *slot = vertex;
        self.winding = sat::winding_sign(&self.vertices);
        self.rebuild_caches();
        Ok(())
    }

    fn assign_vertices(&mut self, vertices: Vec<Vector2>, is_static: bool) {
        let sum = vertices.iter().fold(Vector2::zero(), |acc, v| acc + *v);
        self.origin = sum / vertices.len() as f32;
        self.winding = sat::winding_sign(&vertices);
        self.vertices = vertices;
        self.is_static = is_static;
        self.rebuild_caches();
    }

    /// Returns the local-space vertices
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the centroid of the local vertices
    pub fn get_origin(&self) -> Vector2 {
        self.origin
    }

    /// Returns the world-space center: `origin + position + offset`
    pub fn get_center(&self) -> Vector2 {
        self.origin + self.position + self.offset
    }

    /// Returns the world-space point the shape rotates about
    pub fn get_pivot(&self) -> Vector2 {
        self.get_center() + self.rotation_offset
    }

    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.refresh_caches();
    }

    /// Moves the shape by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        self.set_position(self.position + delta);
    }

    /// Rotation in radians
    pub fn get_rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.refresh_caches();
    }

    pub fn get_offset(&self) -> Vector2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vector2) {
        self.offset = offset;
        self.rebuild_caches();
    }

    pub fn get_rotation_offset(&self) -> Vector2 {
        self.rotation_offset
    }

    pub fn set_rotation_offset(&mut self, rotation_offset: Vector2) {
        self.rotation_offset = rotation_offset;
        self.rebuild_caches();
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    /// Cached world-space vertices at the current transform
    pub fn get_world_vertices(&self) -> &[Vector2] {
        &self.world_vertices
    }

    /// Cached outward unit normals, one per edge of [`world_vertices`](Self::world_vertices)
    pub fn get_edge_normals(&self) -> &[Vector2] {
        &self.edge_normals
    }

    /// Bounding rectangle enclosing the current world vertices
    pub fn get_bounds(&self) -> Aabb {
        self.bounds
    }

    /// Computes the world vertices as if the shape were moved by `sweep`.
    ///
    /// Nothing is cached, so callers can query a prospective position
    /// without committing it.
    pub fn world_vertices_at(&self, sweep: Vector2) -> Vec<Vector2> {
        let translation = self.position + self.offset + sweep;
        let pivot = self.get_pivot() + sweep;

        self.vertices
            .iter()
            .map(|v| (*v + translation).rotate_about(pivot, self.rotation))
            .collect()
    }

    /// Rebuilds the caches unless the transform moved by less than `EPSILON`
    fn refresh_caches(&mut self) {
        let translation = self.position + self.offset;
        let moved = translation.distance_squared(&self.cache_translation) > EPSILON * EPSILON;
        let turned = (self.rotation - self.cache_rotation).abs() > EPSILON;

        if moved || turned {
            self.rebuild_caches();
        }
    }

    fn rebuild_caches(&mut self) {
        self.cache_translation = self.position + self.offset;
        self.cache_rotation = self.rotation;

        if self.vertices.is_empty() {
            return;
        }

        self.world_vertices = self.world_vertices_at(Vector2::zero());
        self.edge_normals = sat::projection_axes(&self.world_vertices, self.winding);
        if let Some(bounds) = Aabb::from_points(&self.world_vertices) {
            self.bounds = bounds;
        }
    }

    /// Separating-axis test against `other`.
    ///
    /// `velocity` is a displacement applied to this shape only; `other` is
    /// treated as stationary. Returns the minimum translation vector that
    /// pushes this shape out of `other` (it points from `other` toward this
    /// shape), or `None` when the shapes are separated. Neither shape is
    /// modified.
    pub fn intersect(&self, other: &ConvexShape, velocity: Vector2) -> Option<Vector2> {
        if self.vertices.is_empty() || other.vertices.is_empty() {
            return None;
        }

        if !self.bounds.translate(velocity).intersects(&other.bounds) {
            return None;
        }

        let vertices_a = self.world_vertices_at(velocity);
        let axes_a = sat::projection_axes(&vertices_a, self.winding);

        let recomputed;
        let (vertices_b, axes_b): (&[Vector2], &[Vector2]) = if other.is_static {
            (other.world_vertices.as_slice(), other.edge_normals.as_slice())
        } else {
            let vertices = other.world_vertices_at(Vector2::zero());
            let axes = sat::projection_axes(&vertices, other.winding);
            recomputed = (vertices, axes);
            (recomputed.0.as_slice(), recomputed.1.as_slice())
        };

        let mut best: Option<(f32, Vector2)> = None;
        for axis in axes_a.iter().chain(axes_b.iter()) {
            if axis.is_zero() {
                continue;
            }

            let width = sat::axis_overlap(axis, &vertices_a, vertices_b)? * (1.0 + MTV_MARGIN);
            if best.map_or(true, |(best_width, _)| width < best_width) {
                best = Some((width, *axis));
            }
        }

        let (width, axis) = best?;
        let mut mtv = axis * width;

        let direction = self.get_center() - other.get_center();
        if direction.dot(&mtv) < 0.0 {
            mtv = -mtv;
        }

        Some(mtv)
    }

    /// Returns true if `point` lies inside or on the boundary of the shape
    pub fn contains_point(&self, point: Vector2) -> bool {
        if self.vertices.is_empty() || !self.bounds.contains_point(point) {
            return false;
        }

        self.world_vertices
            .iter()
            .zip(&self.edge_normals)
            .all(|(vertex, normal)| (point - *vertex).dot(normal) <= EPSILON)
    }

    /// Area enclosed by the polygon (zero for segments)
    pub fn area(&self) -> f32 {
        sat::signed_area_doubled(&self.vertices).abs() * 0.5
    }

    /// Area-weighted centroid of the local vertices, falling back to the
    /// vertex mean for degenerate polygons
    pub fn area_centroid(&self) -> Vector2 {
        let doubled = sat::signed_area_doubled(&self.vertices);
        if doubled.abs() < EPSILON {
            return self.origin;
        }

        let n = self.vertices.len();
        let mut sum = Vector2::zero();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            sum += (a + b) * a.cross(&b);
        }
        sum / (3.0 * doubled)
    }

    /// Moment of inertia about the area centroid for a uniform body of `mass`
    pub fn moment_of_inertia(&self, mass: f32) -> f32 {
        let doubled = sat::signed_area_doubled(&self.vertices);
        if doubled.abs() < EPSILON || mass <= 0.0 {
            return 0.0;
        }

        let centroid = self.area_centroid();
        let n = self.vertices.len();
        let mut numerator = 0.0;
        for i in 0..n {
            let a = self.vertices[i] - centroid;
            let b = self.vertices[(i + 1) % n] - centroid;
            numerator += a.cross(&b) * (a.dot(&a) + a.dot(&b) + b.dot(&b));
        }

        mass * numerator / (6.0 * doubled)
    }
}
