use sat_physics::error::PhysicsError;
use sat_physics::math::Vector2;
use sat_physics::shapes::{ConvexShape, MTV_MARGIN};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::FRAC_PI_2;

fn unit_square_at(x: f32, y: f32) -> ConvexShape {
    let mut shape = ConvexShape::from_vertices(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])
    .unwrap();
    shape.set_position(Vector2::new(x, y));
    shape
}

#[test]
fn test_overlapping_squares_report_mtv_along_x() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(0.5, 0.0);

    let mtv = a.intersect(&b, Vector2::zero()).expect("squares overlap");

    assert_relative_eq!(mtv.x.abs(), 0.5 * (1.0 + MTV_MARGIN), epsilon = 1e-5);
    assert_abs_diff_eq!(mtv.y, 0.0, epsilon = 1e-6);

    // Points from the second shape toward the first
    assert!(mtv.x < 0.0);

    let reverse = b.intersect(&a, Vector2::zero()).unwrap();
    assert!(reverse.x > 0.0);
}

#[test]
fn test_separated_shapes_do_not_touch_caches() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(3.0, 0.0);

    // Snapshot both caches
    let vertices_before = a.get_world_vertices().to_vec();
    let normals_before = b.get_edge_normals().to_vec();
    let bounds_before = (a.get_bounds(), b.get_bounds());

    assert!(a.intersect(&b, Vector2::zero()).is_none());

    assert_eq!(a.get_world_vertices(), vertices_before.as_slice());
    assert_eq!(b.get_edge_normals(), normals_before.as_slice());
    assert_eq!((a.get_bounds(), b.get_bounds()), bounds_before);
}

#[test]
fn test_separating_axis_inside_bounds_overlap() {
    // Bounding boxes overlap but the diagonal edge separates the triangles
    let a = ConvexShape::from_vertices(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(0.0, 2.0),
    ])
    .unwrap();
    let mut b = ConvexShape::from_vertices(&[
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(2.0, 0.0),
    ])
    .unwrap();
    b.set_position(Vector2::new(0.2, 0.2));

    assert!(a.get_bounds().intersects(&b.get_bounds()));
    assert!(a.intersect(&b, Vector2::zero()).is_none());
}

#[test]
fn test_swept_query_moves_only_the_querying_shape() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(1.5, 0.0);

    assert!(a.intersect(&b, Vector2::zero()).is_none());

    let mtv = a.intersect(&b, Vector2::new(1.0, 0.0)).expect("sweep reaches b");
    assert_relative_eq!(mtv.length(), 0.5 * (1.0 + MTV_MARGIN), epsilon = 1e-5);

    // Nothing was committed
    assert_eq!(a.get_position(), Vector2::zero());
}

#[test]
fn test_static_and_dynamic_targets_agree() {
    let a = unit_square_at(0.0, 0.0);
    let mut b = unit_square_at(0.25, 0.9);

    // Query once with cached normals and once recomputing them
    let with_cache = a.intersect(&b, Vector2::zero()).unwrap();
    b.set_static(false);
    let recomputed = a.intersect(&b, Vector2::zero()).unwrap();

    assert_abs_diff_eq!(with_cache, recomputed, epsilon = 1e-6);
    assert_abs_diff_eq!(with_cache, Vector2::new(0.0, -0.1 * (1.0 + MTV_MARGIN)), epsilon = 1e-5);
}

#[test]
fn test_set_shape_rejects_single_vertex() {
    // An empty shape stays empty
    let mut empty = ConvexShape::new();
    let result = empty.set_shape(&[Vector2::new(1.0, 1.0)], true);
    assert!(matches!(result, Err(PhysicsError::InvalidShape(_))));
    assert_eq!(empty.vertex_count(), 0);

    // A built shape keeps its old vertices
    let mut square = unit_square_at(2.0, 0.0);
    let before = square.get_world_vertices().to_vec();
    assert!(square.set_shape(&[Vector2::zero()], true).is_err());
    assert_eq!(square.vertex_count(), 4);
    assert_eq!(square.get_world_vertices(), before.as_slice());

    assert!(ConvexShape::from_vertices(&[]).is_err());
}

#[test]
fn test_set_vertex_checks_bounds() {
    let mut shape = ConvexShape::rectangle(1.0, 1.0);

    let error = shape.set_vertex(4, Vector2::zero()).unwrap_err();
    assert_eq!(error, PhysicsError::VertexIndexOutOfRange { index: 4, count: 4 });

    shape.set_vertex(2, Vector2::new(2.0, 2.0)).unwrap();
    assert_eq!(shape.get_vertices()[2], Vector2::new(2.0, 2.0));
    assert_eq!(shape.get_bounds().max, Vector2::new(2.0, 2.0));

    // The centroid stays where set_shape put it
    assert_eq!(shape.get_origin(), Vector2::new(0.5, 0.5));
}

#[test]
fn test_set_vertex_rejects_non_finite_vertices() {
    let mut shape = ConvexShape::rectangle(1.0, 1.0);
    let before = shape.get_world_vertices().to_vec();

    // Same rule as set_shape
    let result = shape.set_vertex(1, Vector2::new(f32::NAN, 0.0));
    assert!(matches!(result, Err(PhysicsError::InvalidShape(_))));
    assert!(shape.set_vertex(3, Vector2::new(0.0, f32::INFINITY)).is_err());

    // Nothing was touched
    assert_eq!(shape.get_vertices()[1], Vector2::new(1.0, 0.0));
    assert_eq!(shape.get_world_vertices(), before.as_slice());
    assert!(shape.get_edge_normals().iter().all(|n| n.is_finite()));
}

#[test]
fn test_rectangle_factory_and_center() {
    let mut shape = ConvexShape::rectangle(2.0, 1.0);
    assert_eq!(
        shape.get_vertices(),
        &[
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 1.0),
            Vector2::new(0.0, 1.0),
        ]
    );
    assert_eq!(shape.get_center(), Vector2::new(1.0, 0.5));

    // The center follows the position
    shape.set_position(Vector2::new(3.0, -1.0));
    assert_eq!(shape.get_center(), Vector2::new(4.0, -0.5));

    // And the offset
    shape.set_offset(Vector2::new(1.0, 0.0));
    assert_eq!(shape.get_center(), Vector2::new(5.0, -0.5));
    assert_eq!(shape.get_bounds().min, Vector2::new(4.0, -1.0));
}

#[test]
fn test_rotation_about_center() {
    let mut shape = ConvexShape::rectangle(2.0, 1.0);
    shape.set_rotation(FRAC_PI_2);

    let bounds = shape.get_bounds();
    assert_abs_diff_eq!(bounds.min, Vector2::new(0.5, -0.5), epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.max, Vector2::new(1.5, 1.5), epsilon = 1e-5);

    // Normals rotate with the shape and stay unit length
    for normal in shape.get_edge_normals() {
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-5);
    }
    assert_abs_diff_eq!(shape.get_edge_normals()[0], Vector2::new(1.0, 0.0), epsilon = 1e-5);
}

#[test]
fn test_rotation_offset_moves_the_pivot() {
    // Pivot on the bottom-left corner
    let mut shape = ConvexShape::rectangle(1.0, 1.0);
    // Rotate a quarter turn about it
    shape.set_rotation_offset(Vector2::new(-0.5, -0.5));
    assert_eq!(shape.get_pivot(), Vector2::zero());

    shape.set_rotation(FRAC_PI_2);
    let bounds = shape.get_bounds();
    assert_abs_diff_eq!(bounds.min, Vector2::new(-1.0, 0.0), epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.max, Vector2::new(0.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_normals_point_outward_for_clockwise_input() {
    let clockwise = ConvexShape::from_vertices(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(1.0, 0.0),
    ])
    .unwrap();

    // Every normal faces away from the center
    let center = clockwise.get_center();
    for (vertex, normal) in clockwise.get_world_vertices().iter().zip(clockwise.get_edge_normals()) {
        assert!((*vertex - center).dot(normal) > 0.0);
    }
}

#[test]
fn test_degenerate_edges_are_skipped() {
    // A square with a repeated vertex
    let shape = ConvexShape::from_vertices(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])
    .unwrap();

    assert_eq!(shape.get_edge_normals().len(), shape.vertex_count());
    assert!(shape.get_edge_normals().iter().all(|n| n.is_finite()));

    // SAT still gives a finite answer
    let other = unit_square_at(0.5, 0.0);
    let mtv = shape.intersect(&other, Vector2::zero()).unwrap();
    assert!(mtv.is_finite());
}

#[test]
fn test_segment_shape_is_accepted() {
    // Two vertices make a segment with no area
    let segment = ConvexShape::from_vertices(&[Vector2::new(0.0, 0.5), Vector2::new(1.0, 0.5)]).unwrap();
    assert_eq!(segment.area(), 0.0);

    // It still collides
    let square = unit_square_at(0.0, 0.0);
    assert!(segment.intersect(&square, Vector2::zero()).is_some());
}

#[test]
fn test_area_and_inertia() {
    let shape = ConvexShape::rectangle(2.0, 3.0);
    assert_relative_eq!(shape.area(), 6.0);

    // m (w^2 + h^2) / 12
    assert_relative_eq!(shape.moment_of_inertia(12.0), 13.0, epsilon = 1e-4);
    assert_eq!(shape.moment_of_inertia(0.0), 0.0);
}

#[test]
fn test_contains_point() {
    let mut shape = ConvexShape::rectangle(1.0, 1.0);
    shape.set_position(Vector2::new(2.0, 2.0));

    // Inside, on a corner, and outside
    assert!(shape.contains_point(Vector2::new(2.5, 2.5)));
    assert!(shape.contains_point(Vector2::new(2.0, 2.0)));
    assert!(!shape.contains_point(Vector2::new(1.9, 2.5)));
}

#[test]
fn test_tiny_moves_are_accumulated() {
    let mut shape = ConvexShape::rectangle(1.0, 1.0);
    let before = shape.get_world_vertices().to_vec();

    // A negligible move leaves the cache alone
    shape.set_position(Vector2::new(1e-8, 0.0));
    assert_eq!(shape.get_world_vertices(), before.as_slice());

    // A real move rebuilds it
    shape.set_position(Vector2::new(0.5, 0.0));
    assert_abs_diff_eq!(shape.get_world_vertices()[0], Vector2::new(0.5, 0.0), epsilon = 1e-6);
}

#[test]
fn test_random_separated_pairs_never_collide() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let width = rng.gen_range(0.1..3.0);
        let height = rng.gen_range(0.1..3.0);
        let gap = rng.gen_range(0.001..2.0);
        let y = rng.gen_range(-2.0..2.0);

        // Place b to the right of a with a positive gap
        let mut a = ConvexShape::rectangle(width, height);
        a.set_position(Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)));

        let mut b = ConvexShape::rectangle(rng.gen_range(0.1..3.0), rng.gen_range(0.1..3.0));
        b.set_position(a.get_position() + Vector2::new(width + gap, y));

        assert!(a.intersect(&b, Vector2::zero()).is_none());
        assert!(b.intersect(&a, Vector2::zero()).is_none());
    }
}

#[test]
fn test_random_overlaps_push_apart() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let depth = rng.gen_range(0.01..0.4);
        let a = unit_square_at(0.0, 0.0);
        let b = unit_square_at(1.0 - depth, rng.gen_range(-0.5..0.5));

        // Never deeper than the overlap, always pushing a away from b
        let mtv = a.intersect(&b, Vector2::zero()).expect("shapes overlap");
        assert!(mtv.length() <= depth * (1.0 + MTV_MARGIN) + 1e-4);
        assert!(mtv.dot(&(a.get_center() - b.get_center())) >= 0.0);
    }
}
