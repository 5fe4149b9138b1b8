//! Events emitted by the interaction systems.
//!
//! Nothing inside the crate reads these events; they exist so the host game
//! can hook sounds, HUD prompts, or achievements onto chest and gun changes.

use bevy::prelude::*;

/// Which of the two gun skins is equipped.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GunSelection {
    #[default]
    A,
    B,
}

/// Sent when a gun-swap button release assigns a material.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GunSwapped {
    /// The gun entity whose material was replaced
    pub gun: Entity,
    /// The selection now shown
    pub selection: GunSelection,
}

/// Sent on the frame the chest latch goes from idle to opening.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChestOpenStarted {
    pub lid: Entity,
}

/// Sent on the frame the lid passes its target angle and the latch clears.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ChestOpenFinished {
    pub lid: Entity,
    /// Lid rotation about X in degrees, normalized into [0, 360)
    pub angle: f32,
}
