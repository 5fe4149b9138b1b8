//! Core plugin that sets up game states, events, and the pause toggle.

use bevy::prelude::*;

use super::events::*;
use super::states::*;
use crate::player::MoverConfig;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the PlayState sub-state
/// - Interaction events (GunSwapped, ChestOpenStarted, ChestOpenFinished)
/// - Pause toggling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            .add_event::<GunSwapped>()
            .add_event::<ChestOpenStarted>()
            .add_event::<ChestOpenFinished>()

            // Leave Loading as soon as the config resource is present
            .add_systems(
                Update,
                finish_loading.run_if(in_state(GameState::Loading)),
            )

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame)),
            );
    }
}

/// Transition from Loading to InGame once the mover config is loaded.
fn finish_loading(
    config: Option<Res<MoverConfig>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if config.is_some() {
        info!("Mover settings ready, entering game");
        next_state.set(GameState::InGame);
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Exploring => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Exploring),
        }
    }
}
