//! Keyboard Mover - Entry Point
//!
//! Controls (defaults, see assets/data/player/mover.ron):
//! - Arrow keys: Move
//! - Mouse: Look around
//! - Space: Jump
//! - Left Shift: Run
//! - 1 / 2: Swap gun material
//! - E: Open chest
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Keyboard Mover".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        .add_plugins(keyboard_mover::KeyboardMoverPlugin)

        .run();
}
