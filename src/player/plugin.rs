//! Player plugin - input sampling, ground probe, locomotion and mouse look.

use bevy::prelude::*;

use super::config::load_mover_settings;
use super::input::*;
use super::look::*;
use super::movement::*;
use crate::core::{GameState, PlayState};

/// Per-frame ordering for the mover.
///
/// Sense fills `FrameInput` and the grounded flag, Interact runs the chest
/// and gun triggers, Move steps the velocity and drives the controller.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Sense,
    Interact,
    Move,
}

/// Player plugin - handles settings loading, input actions and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<InputActions>()
            .init_resource::<FrameInput>()

            .add_systems(Startup, load_mover_settings)

            // Input actions are only live while exploring
            .add_systems(
                OnEnter(PlayState::Exploring),
                (enable_input_actions, grab_cursor),
            )
            .add_systems(
                OnExit(PlayState::Exploring),
                (disable_input_actions, release_cursor),
            )

            // System ordering
            .configure_sets(
                Update,
                (
                    LocomotionSet::Sense,
                    LocomotionSet::Interact,
                    LocomotionSet::Move,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame))
                    .run_if(in_state(PlayState::Exploring)),
            )
            .add_systems(
                Update,
                (sample_frame_input, probe_ground).in_set(LocomotionSet::Sense),
            )
            .add_systems(
                Update,
                (mouse_look, apply_locomotion).chain().in_set(LocomotionSet::Move),
            );
    }
}
