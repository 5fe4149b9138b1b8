//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Locomotion state carried between frames.
///
/// `velocity` is stored in the player's local frame: x is right, y is up,
/// z is forward (the move vector's y). It is only rotated into world space
/// when the displacement is computed.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub velocity: Vec3,
    /// Current horizontal speed, including the run bonus while running
    pub speed: f32,
    /// Written by the ground probe every frame
    pub grounded: bool,
    /// Whether the run bonus is currently applied
    pub running: bool,
}

impl LocomotionState {
    pub fn new(speed: f32) -> Self {
        Self {
            velocity: Vec3::ZERO,
            speed,
            grounded: false,
            running: false,
        }
    }
}

/// Camera pitch for the first-person view.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}
