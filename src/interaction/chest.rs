//! Chest lid latch.
//!
//! The lid hinges about its local X axis. Opening is a two-state latch: a
//! press edge in range starts it, and it clears as soon as the lid's X angle
//! drops below the configured target. The angle is read back from the lid
//! transform every frame, so nothing besides the `opening` flag is stored.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::{ChestOpenFinished, ChestOpenStarted};
use crate::player::{FrameInput, LocomotionState, MoverConfig, Player};

/// Marker for the hinged lid entity.
#[derive(Component)]
pub struct ChestLid;

/// Opening latch carried by the lid.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChestLatch {
    pub opening: bool,
}

/// Latch transitions that happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatchEdges {
    /// Triggered this frame while idle
    pub started: bool,
    /// Cleared this frame after being active
    pub finished: bool,
}

/// X rotation of `rotation` in degrees, normalized into [0, 360).
pub fn lid_angle_degrees(rotation: Quat) -> f32 {
    let (x, _, _) = rotation.to_euler(EulerRot::XYZ);
    x.to_degrees().rem_euclid(360.0)
}

impl ChestLatch {
    /// Run one frame of the latch against the lid transform.
    ///
    /// `open_speed` is in degrees per second; `target_angle` in degrees.
    pub fn tick(
        &mut self,
        can_open: bool,
        lid: &mut Transform,
        open_speed: f32,
        target_angle: f32,
        dt: f32,
    ) -> LatchEdges {
        let was_opening = self.opening;
        let mut edges = LatchEdges::default();

        if can_open {
            edges.started = !was_opening;
            self.opening = true;
        }
        if self.opening {
            lid.rotate_local_x((-open_speed * dt).to_radians());
        }
        if lid_angle_degrees(lid.rotation) < target_angle {
            edges.finished = self.opening;
            self.opening = false;
        }

        edges
    }
}

/// Open the chest when the player presses the chest button close enough.
///
/// Like every other interaction this only runs while grounded, so a lid
/// that is still opening pauses while the player is in the air.
pub fn open_chest_if_needed(
    time: Res<Time>,
    config: Res<MoverConfig>,
    input: Res<FrameInput>,
    player_query: Query<(&Transform, &LocomotionState), With<Player>>,
    mut lid_query: Query<
        (Entity, &GlobalTransform, &mut Transform, &mut ChestLatch),
        (With<ChestLid>, Without<Player>),
    >,
    mut started_events: EventWriter<ChestOpenStarted>,
    mut finished_events: EventWriter<ChestOpenFinished>,
) {
    let Ok((player_transform, state)) = player_query.get_single() else {
        return;
    };
    if !state.grounded {
        return;
    }

    let dt = time.delta_secs();

    for (lid, lid_global, mut lid_transform, mut latch) in lid_query.iter_mut() {
        let distance = player_transform
            .translation
            .distance(lid_global.translation());
        let can_open = distance < config.chest_player_distance && input.chest_pressed;

        let edges = latch.tick(
            can_open,
            &mut lid_transform,
            config.open_chest_speed,
            config.open_chest_rotation_x,
            dt,
        );

        if edges.started {
            info!("Opening chest {:?} (distance {:.2})", lid, distance);
            started_events.send(ChestOpenStarted { lid });
        }
        if edges.finished {
            let angle = lid_angle_degrees(lid_transform.rotation);
            info!("Chest {:?} open at {:.1} degrees", lid, angle);
            finished_events.send(ChestOpenFinished { lid, angle });
        }
    }
}

/// Spawn a chest body with a hinged lid.
///
/// Returns the body and lid entities.
pub fn spawn_chest(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> (Entity, Entity) {
    let (width, height, depth) = (1.0, 0.6, 0.6);
    let lid_thickness = 0.1;

    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.24, 0.14),
        perceptual_roughness: 0.8,
        ..default()
    });

    let body = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
            MeshMaterial3d(wood.clone()),
            Transform::from_translation(position + Vec3::Y * height / 2.0),
            RigidBody::Fixed,
            Collider::cuboid(width / 2.0, height / 2.0, depth / 2.0),
        ))
        .id();

    // Hinge sits on the back top edge; the lid mesh extends forward from it
    let lid = commands
        .spawn((
            ChestLid,
            ChestLatch::default(),
            Transform::from_xyz(0.0, height / 2.0, -depth / 2.0),
            Visibility::default(),
        ))
        .with_children(|hinge| {
            hinge.spawn((
                Mesh3d(meshes.add(Cuboid::new(width, lid_thickness, depth))),
                MeshMaterial3d(wood),
                Transform::from_xyz(0.0, lid_thickness / 2.0, depth / 2.0),
            ));
        })
        .id();
    commands.entity(body).add_child(lid);

    info!("Spawned chest at {}", position);
    (body, lid)
}
