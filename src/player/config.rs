//! Mover tuning and bindings loaded from an external RON file.
//!
//! Allows tweaking speeds, chest timing and key bindings without recompilation.
//! Every field is optional in the file; anything left out keeps its default.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::input::InputBindings;

/// Default location of the settings file, relative to the working directory.
pub const MOVER_SETTINGS_PATH: &str = "assets/data/player/mover.ron";

/// Tunable parameters for the keyboard mover.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Walking speed in meters/second
    pub speed: f32,
    /// Added to `speed` while the run button is held
    pub run_speed: f32,
    /// Downward acceleration while airborne
    pub gravity: f32,
    /// Added to vertical velocity on a jump press
    pub jump_strength: f32,
    /// The chest can only be opened from closer than this
    pub chest_player_distance: f32,
    /// Lid rotation rate in degrees/second
    pub open_chest_speed: f32,
    /// Lid x rotation (degrees, [0, 360)) below which the chest counts as open
    pub open_chest_rotation_x: f32,
    /// Clamp negative vertical velocity to zero on grounded frames
    pub reset_vertical_on_landing: bool,
    /// Length of the downward ground ray below the capsule
    pub ground_probe_distance: f32,
    /// Mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            speed: 3.5,
            run_speed: 3.5,
            gravity: 9.81,
            jump_strength: 10.0,
            chest_player_distance: 3.0,
            open_chest_speed: 30.0,
            open_chest_rotation_x: 308.0,
            reset_vertical_on_landing: false,
            ground_probe_distance: 0.15,
            mouse_sensitivity: 1.5,
        }
    }
}

impl MoverConfig {
    /// Reject values the per-frame step cannot make sense of.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("speed", self.speed),
            ("run_speed", self.run_speed),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("chest_player_distance", self.chest_player_distance),
            ("open_chest_speed", self.open_chest_speed),
            ("ground_probe_distance", self.ground_probe_distance),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let target = self.open_chest_rotation_x;
        if !target.is_finite() || !(0.0..360.0).contains(&target) {
            return Err(ConfigError::InvalidValue {
                field: "open_chest_rotation_x",
                value: target,
            });
        }

        Ok(())
    }
}

/// On-disk layout of `mover.ron`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoverSettings {
    pub tuning: MoverConfig,
    pub bindings: InputBindings,
}

impl MoverSettings {
    /// Parse and validate settings from RON text.
    ///
    /// `origin` is only used to label errors.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut settings: MoverSettings =
            ron::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                details: e.to_string(),
            })?;

        settings.tuning.validate()?;
        if settings.bindings.validate() {
            warn!("{}: move binding was empty, using arrow keys", origin);
        }

        Ok(settings)
    }

    /// Read settings from a RON file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron(&contents, &display)
    }

    /// Load settings from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::try_load(MOVER_SETTINGS_PATH) {
            Ok(settings) => {
                info!("Loaded mover settings from {}", MOVER_SETTINGS_PATH);
                settings
            }
            Err(e @ ConfigError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load mover settings at startup.
pub fn load_mover_settings(mut commands: Commands) {
    let MoverSettings { tuning, bindings } = MoverSettings::load();
    commands.insert_resource(tuning);
    commands.insert_resource(bindings);
}
