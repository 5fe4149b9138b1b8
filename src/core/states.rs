//! Game state definitions that control when the mover is allowed to run.
//!
//! Player locomotion only ticks while `GameState::InGame` and
//! `PlayState::Exploring` are both active. Pausing leaves the world intact
//! but releases the input actions.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` until the mover config resource exists
/// - Enter `InGame` once loading completes
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Waiting for data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - input actions are enabled
    #[default]
    Exploring,
    /// Game is paused, input actions are disabled
    Paused,
}
