//! Keyboard Mover - first-person keyboard locomotion for Bevy.
//!
//! A player body driven by Rapier's kinematic character controller: walk,
//! run, jump, swap the held gun's material, and open a chest lid.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, interaction events, pause toggle
//! - **Player**: Settings, input bindings, ground probe, locomotion, mouse look
//! - **Interaction**: Chest lid latch, gun material swap
//! - **World**: Demo room with a chest to open

pub mod core;
pub mod interaction;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
///
/// Physics is left to the host: add `RapierPhysicsPlugin` alongside this.
pub struct KeyboardMoverPlugin;

impl Plugin for KeyboardMoverPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Chest and gun triggers
            .add_plugins(interaction::InteractionPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
