//! Gun material swap.

use bevy::prelude::*;

use crate::core::{GunSelection, GunSwapped};
use crate::player::{FrameInput, LocomotionState, Player};

/// Marker for the held gun's render surface.
#[derive(Component)]
pub struct Gun;

/// The two materials a gun can show.
#[derive(Resource, Clone)]
pub struct GunMaterials {
    pub a: Handle<StandardMaterial>,
    pub b: Handle<StandardMaterial>,
}

impl GunMaterials {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            // Gunmetal
            a: materials.add(StandardMaterial {
                base_color: Color::srgb(0.25, 0.26, 0.28),
                perceptual_roughness: 0.35,
                metallic: 0.9,
                ..default()
            }),
            // Brass
            b: materials.add(StandardMaterial {
                base_color: Color::srgb(0.78, 0.6, 0.25),
                perceptual_roughness: 0.3,
                metallic: 0.8,
                ..default()
            }),
        }
    }

    pub fn get(&self, selection: GunSelection) -> Handle<StandardMaterial> {
        match selection {
            GunSelection::A => self.a.clone(),
            GunSelection::B => self.b.clone(),
        }
    }
}

/// Selection requested by this frame's release edges.
///
/// A is applied before B, so releasing both in one frame ends on B.
pub fn requested_selection(input: &FrameInput) -> Option<GunSelection> {
    let mut selection = None;
    if input.gun_a_released {
        selection = Some(GunSelection::A);
    }
    if input.gun_b_released {
        selection = Some(GunSelection::B);
    }
    selection
}

/// Assign the requested gun material while grounded.
pub fn switch_gun_if_needed(
    input: Res<FrameInput>,
    gun_materials: Option<Res<GunMaterials>>,
    player_query: Query<&LocomotionState, With<Player>>,
    mut gun_query: Query<
        (Entity, &mut GunSelection, &mut MeshMaterial3d<StandardMaterial>),
        With<Gun>,
    >,
    mut events: EventWriter<GunSwapped>,
) {
    let Some(selection) = requested_selection(&input) else {
        return;
    };
    let Some(gun_materials) = gun_materials else {
        return;
    };
    let Ok(state) = player_query.get_single() else {
        return;
    };
    if !state.grounded {
        return;
    }

    for (gun, mut current, mut material) in gun_query.iter_mut() {
        *current = selection;
        material.0 = gun_materials.get(selection);
        debug!("Gun {:?} now uses material {:?}", gun, selection);
        events.send(GunSwapped { gun, selection });
    }
}

/// Spawn a simple gun viewmodel under `parent` (normally the player camera).
pub fn spawn_gun(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    gun_materials: &GunMaterials,
) -> Entity {
    parent
        .spawn((
            Gun,
            GunSelection::A,
            Mesh3d(meshes.add(Cuboid::new(0.08, 0.1, 0.45))),
            MeshMaterial3d(gun_materials.get(GunSelection::A)),
            Transform::from_xyz(0.3, -0.2, -0.5),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_release_no_request() {
        let input = FrameInput {
            gun_a_released: false,
            gun_b_released: false,
            ..default()
        };
        assert_eq!(requested_selection(&input), None);
    }

    #[test]
    fn each_release_maps_to_its_selection() {
        let a = FrameInput {
            gun_a_released: true,
            ..default()
        };
        let b = FrameInput {
            gun_b_released: true,
            ..default()
        };
        assert_eq!(requested_selection(&a), Some(GunSelection::A));
        assert_eq!(requested_selection(&b), Some(GunSelection::B));
    }

    #[test]
    fn b_wins_when_both_release() {
        let both = FrameInput {
            gun_a_released: true,
            gun_b_released: true,
            ..default()
        };
        assert_eq!(requested_selection(&both), Some(GunSelection::B));
    }
}
