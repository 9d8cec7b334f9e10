use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sat_physics::{math::Vector2, ConvexShape, Friction, Material, PhysicsWorld, RigidBody};

fn stacked_world(height: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new();

    let mut floor = RigidBody::new_static(ConvexShape::rectangle(20.0, 1.0), Material::concrete(), Friction::default());
    floor.set_position(Vector2::new(-10.0, -1.0));
    world.add_body(floor);

    for i in 0..height {
        let mut body = RigidBody::from_density(ConvexShape::rectangle(1.0, 1.0), Material::wood(), Friction::default());
        // Small gap so every box starts separated
        body.set_position(Vector2::new(0.0, i as f32 * 1.05));
        world.add_body(body);
    }

    world
}

fn bench_box_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");

    for height in [4, 16, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(height), &height, |b, &height| {
            b.iter(|| {
                let mut world = stacked_world(height);
                for _ in 0..60 {
                    world.update(black_box(1.0 / 60.0));
                }
                world
            })
        });
    }

    group.finish();
}

fn bench_scattered_polygons(c: &mut Criterion) {
    c.bench_function("scattered_hexagons", |b| {
        let hexagon: Vec<Vector2> = (0..6)
            .map(|i| Vector2::unit_x().rotate(i as f32 * std::f32::consts::PI / 3.0) * 0.5)
            .collect();
        let shape = ConvexShape::from_vertices(&hexagon).expect("hexagon is a valid polygon");

        b.iter(|| {
            let mut world = PhysicsWorld::new();
            for i in 0..64 {
                let mut body = RigidBody::from_density(shape.clone(), Material::rubber(), Friction::default());
                body.set_position(Vector2::new((i % 8) as f32 * 1.2, (i / 8) as f32 * 1.2));
                world.add_body(body);
            }
            for _ in 0..30 {
                world.step();
            }
            world
        })
    });
}

criterion_group!(benches, bench_box_stack, bench_scattered_polygons);
criterion_main!(benches);
