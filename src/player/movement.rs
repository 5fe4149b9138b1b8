//! First-person keyboard locomotion.
//!
//! The per-frame rules live on [`LocomotionState`] so they can be exercised
//! without a running app; the systems below only feed them the ground probe,
//! the sampled input and the frame time, and hand the result to Rapier.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::MoverConfig;
use super::input::FrameInput;

/// Capsule half height and radius of the player collider.
const CAPSULE_HALF_HEIGHT: f32 = 0.5;
const CAPSULE_RADIUS: f32 = 0.3;

impl LocomotionState {
    /// Advance the velocity by one frame.
    ///
    /// Grounded frames apply jump and run edges and overwrite the horizontal
    /// velocity from the move axis. Airborne frames only integrate gravity.
    pub fn step(&mut self, input: &FrameInput, config: &MoverConfig, dt: f32) {
        if self.grounded {
            if config.reset_vertical_on_landing && self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            if input.jump_pressed {
                self.velocity.y += config.jump_strength;
            }
            self.toggle_run(input, config.run_speed);

            self.velocity.x = input.move_axis.x * self.speed;
            self.velocity.z = input.move_axis.y * self.speed;
        } else {
            self.velocity.y -= config.gravity * dt;
        }
    }

    /// Apply the run bonus on press and remove it on release.
    ///
    /// A press while already running, or a release while not running, is
    /// ignored, so repeated edges never stack. Edges only count on grounded
    /// frames: a release that lands while airborne or paused is lost, and the
    /// bonus stays until the next grounded press and release.
    fn toggle_run(&mut self, input: &FrameInput, run_speed: f32) {
        if input.run_pressed {
            if !self.running {
                self.speed += run_speed;
                self.running = true;
            }
        } else if input.run_released && self.running {
            self.speed -= run_speed;
            self.running = false;
        }
    }

    /// World-space displacement for this frame.
    ///
    /// The whole velocity, vertical part included, is rotated by `facing`.
    /// Local forward (+z in the stored velocity) is Bevy's -Z.
    pub fn displacement(&self, facing: Quat, dt: f32) -> Vec3 {
        let local = Vec3::new(self.velocity.x, self.velocity.y, -self.velocity.z);
        facing * local * dt
    }
}

/// Ray cast just below the capsule to decide whether the player stands on something.
pub fn probe_ground(
    config: Res<MoverConfig>,
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<(Entity, &Transform, &mut LocomotionState), With<Player>>,
) {
    let Ok((player_entity, transform, mut state)) = player_query.get_single_mut() else {
        return;
    };

    state.grounded = if let Ok(context) = rapier_context.get_single() {
        // Start just above the bottom of the capsule
        let ray_origin =
            transform.translation - Vec3::Y * (CAPSULE_HALF_HEIGHT + CAPSULE_RADIUS - 0.05);

        context
            .cast_ray(
                ray_origin,
                Vec3::NEG_Y,
                config.ground_probe_distance,
                true,
                QueryFilter::default().exclude_collider(player_entity),
            )
            .is_some()
    } else {
        // Fallback: assume grounded if no physics context
        true
    };
}

/// Step the locomotion state and hand the displacement to the character controller.
pub fn apply_locomotion(
    time: Res<Time>,
    config: Res<MoverConfig>,
    input: Res<FrameInput>,
    mut player_query: Query<
        (&Transform, &mut LocomotionState, &mut KinematicCharacterController),
        With<Player>,
    >,
) {
    let Ok((transform, mut state, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    state.step(&input, &config, dt);
    controller.translation = Some(state.displacement(transform.rotation, dt));
}

/// Spawn the player body with a first-person camera.
///
/// Returns the player and camera entities.
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: &MoverConfig) -> (Entity, Entity) {
    let player = commands
        .spawn((
            Player,
            LocomotionState::new(config.speed),
            Transform::from_translation(position),
            Visibility::default(),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                autostep: Some(CharacterAutostep {
                    max_height: CharacterLength::Absolute(0.4),
                    min_width: CharacterLength::Absolute(0.3),
                    include_dynamic_bodies: false,
                }),
                max_slope_climb_angle: 45_f32.to_radians(),
                min_slope_slide_angle: 30_f32.to_radians(),
                ..default()
            },
        ))
        .id();

    // Camera at eye level, child of the body so it follows yaw
    let camera = commands
        .spawn((
            Camera3d::default(),
            PlayerCamera::default(),
            Transform::from_xyz(0.0, 0.4, 0.0),
        ))
        .id();
    commands.entity(player).add_child(camera);

    info!("Spawned player at {}", position);
    (player, camera)
}
