// IntSar-3D math: logs the billboard decomposition of a few reference rotations

use glam::{DQuat, DVec3};
use intsar_math::{calc_degree, deg_to_rad, get_forward, quaternion_to_matrix, Transform};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let rotations = [
        ("identity", DQuat::IDENTITY),
        ("pitch 30", DQuat::from_rotation_x(deg_to_rad(30.0))),
        ("yaw -90", DQuat::from_rotation_y(deg_to_rad(-90.0))),
        ("roll 45", DQuat::from_rotation_z(deg_to_rad(45.0))),
        ("half turn x", DQuat::from_rotation_x(deg_to_rad(180.0))),
    ];

    for (name, q) in rotations {
        let m = quaternion_to_matrix(q);
        log::info!(
            "{name}: forward={} billboard={}",
            get_forward(&m),
            calc_degree(q)
        );
    }

    let t = Transform::new(
        DVec3::new(0.0, 1.5, -4.0),
        DQuat::from_rotation_y(deg_to_rad(45.0)),
        DVec3::splat(2.0),
    );
    log::info!(
        "transform: translation={} right={} up={} forward={}",
        t.translation(),
        t.right(),
        t.up(),
        t.forward()
    );
}
