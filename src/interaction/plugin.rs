//! Interaction plugin - chest and gun triggers.

use bevy::prelude::*;

use super::chest::open_chest_if_needed;
use super::gun::switch_gun_if_needed;
use crate::player::LocomotionSet;

/// Interaction plugin - runs the grounded-only triggers between sensing and moving.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (open_chest_if_needed, switch_gun_if_needed).in_set(LocomotionSet::Interact),
        );
    }
}
