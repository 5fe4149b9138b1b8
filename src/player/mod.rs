//! Player module - settings, input bindings, locomotion, and camera control.

mod components;
mod config;
mod error;
mod input;
mod look;
mod movement;
mod plugin;

pub use components::*;
pub use config::{load_mover_settings, MoverConfig, MoverSettings, MOVER_SETTINGS_PATH};
pub use error::ConfigError;
pub use input::{
    disable_input_actions, enable_input_actions, sample_frame_input, CompositeBinding, FrameInput,
    InputActions, InputBindings,
};
pub use movement::{apply_locomotion, probe_ground, spawn_player};
pub use plugin::{LocomotionSet, PlayerPlugin};
