//! Demo room construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::interaction::spawn_chest;

/// Size of the square floor in meters.
const ROOM_SIZE: f32 = 20.0;

/// Build the room and return the player spawn position.
pub fn build_demo_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Vec3 {
    setup_environment(commands);

    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.28, 0.27, 0.26),
        perceptual_roughness: 0.9,
        ..default()
    });

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_SIZE, ROOM_SIZE))),
        MeshMaterial3d(stone.clone()),
        Transform::default(),
        RigidBody::Fixed,
        Collider::cuboid(ROOM_SIZE / 2.0, 0.05, ROOM_SIZE / 2.0),
    ));

    // A ledge to jump onto
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 0.8, 3.0))),
        MeshMaterial3d(stone),
        Transform::from_xyz(-5.0, 0.4, -4.0),
        RigidBody::Fixed,
        Collider::cuboid(1.5, 0.4, 1.5),
    ));

    spawn_chest(commands, meshes, materials, Vec3::new(0.0, 0.0, -5.0));

    Vec3::new(0.0, 1.0, 0.0)
}

/// Set up ambient light and a directional light.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.95, 0.9),
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
