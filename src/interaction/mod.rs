//! Interaction module - the chest lid latch and the gun material swap.

mod chest;
mod gun;
mod plugin;

pub use chest::{lid_angle_degrees, open_chest_if_needed, spawn_chest, ChestLatch, ChestLid, LatchEdges};
pub use gun::{requested_selection, spawn_gun, switch_gun_if_needed, Gun, GunMaterials};
pub use plugin::InteractionPlugin;
