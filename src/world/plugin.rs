//! World plugin - spawns the demo room.

use bevy::prelude::*;

use super::builder::build_demo_room;
use crate::core::GameState;
use crate::interaction::{spawn_gun, GunMaterials};
use crate::player::{spawn_player, MoverConfig};

/// World plugin - builds the room when gameplay starts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_level);
    }
}

/// Set up the room, the chest, and the player holding a gun.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<MoverConfig>,
) {
    info!("Building demo room");

    let player_pos = build_demo_room(&mut commands, &mut meshes, &mut materials);

    let gun_materials = GunMaterials::new(&mut materials);
    let (_, camera) = spawn_player(&mut commands, player_pos, &config);
    commands.entity(camera).with_children(|parent| {
        spawn_gun(parent, &mut meshes, &gun_materials);
    });
    commands.insert_resource(gun_materials);
}
