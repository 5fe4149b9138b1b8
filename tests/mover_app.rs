//! Runs the mover systems inside a headless app with a fixed 100ms frame.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::{
    Collider, KinematicCharacterController, NoUserData, RapierPhysicsPlugin, RigidBody,
};

use keyboard_mover::core::{ChestOpenFinished, ChestOpenStarted, GunSelection, GunSwapped};
use keyboard_mover::interaction::{
    lid_angle_degrees, open_chest_if_needed, switch_gun_if_needed, ChestLatch, ChestLid, Gun,
    GunMaterials,
};
use keyboard_mover::player::{
    apply_locomotion, probe_ground, sample_frame_input, spawn_player as spawn_player_body,
    FrameInput, InputActions, InputBindings, LocomotionState, MoverConfig, Player,
};

const EPS: f32 = 1e-4;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<MoverConfig>()
        .init_resource::<FrameInput>()
        .add_event::<GunSwapped>()
        .add_event::<ChestOpenStarted>()
        .add_event::<ChestOpenFinished>();
    app
}

fn spawn_player(app: &mut App, grounded: bool) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            LocomotionState {
                grounded,
                ..LocomotionState::new(3.5)
            },
            Transform::default(),
            KinematicCharacterController::default(),
        ))
        .id()
}

fn set_input(app: &mut App, input: FrameInput) {
    *app.world_mut().resource_mut::<FrameInput>() = input;
}

#[test]
fn falling_player_accelerates_and_moves_down() {
    let mut app = test_app();
    app.add_systems(Update, apply_locomotion);
    let player = spawn_player(&mut app, false);

    let vertical = |app: &App| app.world().get::<LocomotionState>(player).unwrap().velocity.y;

    app.update();
    let start = vertical(&app);

    app.update();
    let first = vertical(&app);
    assert!((first - start + 0.981).abs() < EPS);

    app.update();
    let second = vertical(&app);
    assert!((second - first + 0.981).abs() < EPS);

    let controller = app.world().get::<KinematicCharacterController>(player).unwrap();
    let translation = controller.translation.unwrap();
    assert!((translation.y - second * 0.1).abs() < EPS);
}

#[test]
fn grounded_player_walks_relative_to_facing() {
    let mut app = test_app();
    app.add_systems(Update, apply_locomotion);
    let player = spawn_player(&mut app, true);
    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .rotate_y(std::f32::consts::PI);

    app.update();
    set_input(
        &mut app,
        FrameInput {
            move_axis: Vec2::Y,
            ..default()
        },
    );
    app.update();

    let state = app.world().get::<LocomotionState>(player).unwrap();
    assert!((state.velocity.z - 3.5).abs() < EPS);

    // Facing backwards, forward input moves along +Z
    let controller = app.world().get::<KinematicCharacterController>(player).unwrap();
    let translation = controller.translation.unwrap();
    assert!((translation - Vec3::new(0.0, 0.0, 0.35)).length() < EPS);
}

#[test]
fn disabled_actions_sample_nothing() {
    let mut app = test_app();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<InputBindings>()
        .init_resource::<InputActions>()
        .add_systems(Update, sample_frame_input);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();
    assert_eq!(*app.world().resource::<FrameInput>(), FrameInput::default());

    app.world_mut().resource_mut::<InputActions>().enabled = true;
    app.update();
    // Nobody clears the keyboard here, so the press edge is still visible
    assert!(app.world().resource::<FrameInput>().jump_pressed);
}

fn spawn_gun(app: &mut App) -> (Entity, GunMaterials) {
    let materials = GunMaterials {
        a: Handle::weak_from_u128(0x0a),
        b: Handle::weak_from_u128(0x0b),
    };
    app.insert_resource(materials.clone());
    let gun = app
        .world_mut()
        .spawn((Gun, GunSelection::A, MeshMaterial3d(materials.a.clone())))
        .id();
    (gun, materials)
}

#[test]
fn gun_release_assigns_material() {
    let mut app = test_app();
    app.add_systems(Update, switch_gun_if_needed);
    spawn_player(&mut app, true);
    let (gun, materials) = spawn_gun(&mut app);

    set_input(
        &mut app,
        FrameInput {
            gun_b_released: true,
            ..default()
        },
    );
    app.update();

    assert_eq!(*app.world().get::<GunSelection>(gun).unwrap(), GunSelection::B);
    let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(gun).unwrap();
    assert_eq!(material.0, materials.b);

    let events = app.world().resource::<Events<GunSwapped>>();
    let sent: Vec<_> = events.iter_current_update_events().copied().collect();
    assert_eq!(
        sent,
        vec![GunSwapped {
            gun,
            selection: GunSelection::B
        }]
    );

    // Releasing A again switches back regardless of the current selection
    set_input(
        &mut app,
        FrameInput {
            gun_a_released: true,
            ..default()
        },
    );
    app.update();
    let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(gun).unwrap();
    assert_eq!(material.0, materials.a);
}

#[test]
fn gun_swap_waits_for_ground() {
    let mut app = test_app();
    app.add_systems(Update, switch_gun_if_needed);
    spawn_player(&mut app, false);
    let (gun, materials) = spawn_gun(&mut app);

    set_input(
        &mut app,
        FrameInput {
            gun_b_released: true,
            ..default()
        },
    );
    app.update();

    let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(gun).unwrap();
    assert_eq!(material.0, materials.a);
}

fn spawn_lid(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            ChestLid,
            ChestLatch::default(),
            Transform::default(),
            GlobalTransform::from_translation(position),
        ))
        .id()
}

#[test]
fn chest_opens_to_target_and_stops() {
    let mut app = test_app();
    app.add_systems(Update, open_chest_if_needed);
    spawn_player(&mut app, true);
    let lid = spawn_lid(&mut app, Vec3::new(0.0, 0.0, -2.0));

    app.update();
    set_input(
        &mut app,
        FrameInput {
            chest_pressed: true,
            ..default()
        },
    );
    app.update();
    assert!(app.world().get::<ChestLatch>(lid).unwrap().opening);
    assert_eq!(
        app.world().resource::<Events<ChestOpenStarted>>().len(),
        1
    );

    set_input(&mut app, FrameInput::default());
    let mut previous = lid_angle_degrees(app.world().get::<Transform>(lid).unwrap().rotation);
    let mut frames = 0;
    while app.world().get::<ChestLatch>(lid).unwrap().opening {
        app.update();
        let angle = lid_angle_degrees(app.world().get::<Transform>(lid).unwrap().rotation);
        assert!(angle < previous);
        previous = angle;
        frames += 1;
        assert!(frames < 100, "chest never finished opening");
    }

    let target = MoverConfig::default().open_chest_rotation_x;
    assert!(previous < target);

    // Once open, idle frames leave the lid alone
    let resting = app.world().get::<Transform>(lid).unwrap().rotation;
    app.update();
    assert_eq!(app.world().get::<Transform>(lid).unwrap().rotation, resting);
}

#[test]
fn chest_out_of_range_stays_shut() {
    let mut app = test_app();
    app.add_systems(Update, open_chest_if_needed);
    spawn_player(&mut app, true);
    let lid = spawn_lid(&mut app, Vec3::new(0.0, 0.0, -10.0));

    app.update();
    set_input(
        &mut app,
        FrameInput {
            chest_pressed: true,
            ..default()
        },
    );
    app.update();

    assert!(!app.world().get::<ChestLatch>(lid).unwrap().opening);
    assert_eq!(
        app.world().get::<Transform>(lid).unwrap().rotation,
        Quat::IDENTITY
    );
}

fn set_grounded(app: &mut App, player: Entity, grounded: bool) {
    app.world_mut()
        .get_mut::<LocomotionState>(player)
        .unwrap()
        .grounded = grounded;
}

#[test]
fn chest_press_while_airborne_is_ignored() {
    let mut app = test_app();
    app.add_systems(Update, open_chest_if_needed);
    spawn_player(&mut app, false);
    let lid = spawn_lid(&mut app, Vec3::new(0.0, 0.0, -2.0));

    app.update();
    set_input(
        &mut app,
        FrameInput {
            chest_pressed: true,
            ..default()
        },
    );
    app.update();

    assert!(!app.world().get::<ChestLatch>(lid).unwrap().opening);
    assert_eq!(
        app.world().get::<Transform>(lid).unwrap().rotation,
        Quat::IDENTITY
    );
    assert!(app.world().resource::<Events<ChestOpenStarted>>().is_empty());
}

#[test]
fn opening_lid_pauses_while_airborne() {
    let mut app = test_app();
    app.add_systems(Update, open_chest_if_needed);
    let player = spawn_player(&mut app, true);
    let lid = spawn_lid(&mut app, Vec3::new(0.0, 0.0, -2.0));
    let lid_angle = |app: &App| lid_angle_degrees(app.world().get::<Transform>(lid).unwrap().rotation);

    app.update();
    set_input(
        &mut app,
        FrameInput {
            chest_pressed: true,
            ..default()
        },
    );
    app.update();
    set_input(&mut app, FrameInput::default());
    assert!(app.world().get::<ChestLatch>(lid).unwrap().opening);

    // Jump: the lid holds its angle and the latch stays set
    set_grounded(&mut app, player, false);
    let held = lid_angle(&app);
    app.update();
    app.update();
    assert_eq!(lid_angle(&app), held);
    assert!(app.world().get::<ChestLatch>(lid).unwrap().opening);

    // Landing resumes the opening
    set_grounded(&mut app, player, true);
    app.update();
    assert!(lid_angle(&app) < held);
}

fn physics_app() -> App {
    let mut app = test_app();
    app.add_plugins((
        bevy::hierarchy::HierarchyPlugin,
        bevy::transform::TransformPlugin,
        bevy::asset::AssetPlugin::default(),
        bevy::scene::ScenePlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
    ))
    .init_asset::<Mesh>()
    .add_systems(Update, probe_ground);

    // Fixed slab whose top face sits at y = 0
    app.world_mut().spawn((
        RigidBody::Fixed,
        Collider::cuboid(5.0, 0.5, 5.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    ));
    app
}

/// Spawn the real player body with its center at `height`.
fn spawn_body(app: &mut App, height: f32) -> Entity {
    let config = MoverConfig::default();
    let world = app.world_mut();
    let (player, _) = spawn_player_body(&mut world.commands(), Vec3::Y * height, &config);
    world.flush();
    player
}

fn settle(app: &mut App) {
    // Colliders reach the query pipeline after a physics step
    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn ground_probe_detects_floor_just_below_capsule() {
    let mut app = physics_app();
    // Capsule bottom (center - 0.8) sits 2cm above the slab
    let player = spawn_body(&mut app, 0.82);
    settle(&mut app);

    assert!(app.world().get::<LocomotionState>(player).unwrap().grounded);
}

#[test]
fn ground_probe_ignores_own_collider_in_the_air() {
    let mut app = physics_app();
    // Capsule bottom 1m above the slab; the ray starts inside the capsule,
    // so a hit here could only come from the player's own collider
    let player = spawn_body(&mut app, 1.8);
    settle(&mut app);

    assert!(!app.world().get::<LocomotionState>(player).unwrap().grounded);
}
