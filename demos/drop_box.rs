use sat_physics::{
    math::Vector2, ConvexShape, Friction, Material, PhysicsWorld, RigidBody, SimulationConfig,
};

fn main() {
    let config = SimulationConfig {
        gravity: Vector2::new(0.0, -10.0),
        ..Default::default()
    };
    let mut world = match PhysicsWorld::with_config(config) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        }
    };

    // Create a floor whose top face sits on y = 0
    let mut floor = RigidBody::new_static(ConvexShape::rectangle(20.0, 1.0), Material::concrete(), Friction::default());
    floor.set_position(Vector2::new(-10.0, -1.0));
    world.add_body(floor);

    // A slightly tilted box dropped from three units up
    let mut crate_box = RigidBody::from_density(ConvexShape::rectangle(1.0, 1.0), Material::wood(), Friction::default());
    crate_box.set_position(Vector2::new(-0.5, 3.0));
    crate_box.set_rotation(0.3);
    let handle = world.add_body(crate_box);

    println!("Drop Box Simulation");
    println!("-------------------");
    println!("{:>6} {:>9} {:>9} {:>9} {:>9}", "time", "x", "y", "angle", "vy");

    // Frames arrive at 40 Hz while the world steps at 60 Hz
    let frame_delta = 1.0 / 40.0;
    for frame in 0..160 {
        world.update(frame_delta);

        if frame % 8 != 0 {
            continue;
        }

        if let Ok(body) = world.get_body(handle) {
            let center = body.get_center();
            println!(
                "{:>6.2} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                world.get_time(),
                center.x,
                center.y,
                body.get_rotation(),
                body.get_linear_velocity().y
            );
        }

        let contacts = world.get_events().get_collision_events_for_body(handle).len();
        if contacts > 0 {
            println!("       {} contact event(s) this frame", contacts);
        }
    }
}
