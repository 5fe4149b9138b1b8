//! Mouse look and cursor capture.
//!
//! Yaw turns the player body, which is the facing the mover rotates its
//! velocity by. Pitch only tilts the camera, so looking up or down never
//! tilts the walking direction.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use super::components::*;
use super::config::MoverConfig;

/// Pitch limit, about 80 degrees
const MAX_PITCH: f32 = 1.4;

/// Grab and hide cursor while exploring.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when exploring stops.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Handle mouse movement for looking around.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<MoverConfig>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), Without<Player>>,
) {
    let delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = config.mouse_sensitivity * 0.001;

    player_transform.rotate_y(-delta.x * sensitivity);

    camera.pitch = (camera.pitch - delta.y * sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}
