//! Input bindings and per-frame sampling.
//!
//! The mover never reads the keyboard directly. Once per frame the sampler
//! turns the bound keys into a [`FrameInput`], and every other system reads
//! that snapshot. While the input actions are disabled (paused, or before the
//! game starts) the snapshot is empty, so no stale edges leak through.

use bevy::prelude::*;
use serde::Deserialize;

/// Four keys combined into one 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CompositeBinding {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl CompositeBinding {
    /// The fallback move binding.
    pub const ARROWS: Self = Self {
        up: KeyCode::ArrowUp,
        down: KeyCode::ArrowDown,
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
    };

    /// Raw composite value, each axis in [-1, 1].
    pub fn read(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let axis = |positive: KeyCode, negative: KeyCode| {
            let mut value = 0.0;
            if keys.pressed(positive) {
                value += 1.0;
            }
            if keys.pressed(negative) {
                value -= 1.0;
            }
            value
        };

        Vec2::new(axis(self.right, self.left), axis(self.up, self.down))
    }
}

/// Logical actions and the keys bound to them.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub move_axis: Vec<CompositeBinding>,
    pub jump: KeyCode,
    pub run: KeyCode,
    pub gun_a: KeyCode,
    pub gun_b: KeyCode,
    pub open_chest: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            move_axis: vec![CompositeBinding::ARROWS],
            jump: KeyCode::Space,
            run: KeyCode::ShiftLeft,
            gun_a: KeyCode::Digit1,
            gun_b: KeyCode::Digit2,
            open_chest: KeyCode::KeyE,
        }
    }
}

impl InputBindings {
    /// Synthesize the arrow-key composite if no move binding is present.
    ///
    /// Returns true if the bindings were repaired.
    pub fn validate(&mut self) -> bool {
        if self.move_axis.is_empty() {
            self.move_axis.push(CompositeBinding::ARROWS);
            return true;
        }
        false
    }

    /// Combined move vector across all composites.
    ///
    /// Diagonals are normalized so the result never exceeds unit length.
    pub fn read_move(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let sum: Vec2 = self.move_axis.iter().map(|binding| binding.read(keys)).sum();
        let clamped = sum.clamp(Vec2::NEG_ONE, Vec2::ONE);
        if clamped.length_squared() > 1.0 {
            clamped.normalize()
        } else {
            clamped
        }
    }
}

/// Whether the bound actions are currently live.
#[derive(Resource, Debug, Default)]
pub struct InputActions {
    pub enabled: bool,
}

/// Snapshot of the bound actions for the current frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// x: right, y: forward
    pub move_axis: Vec2,
    pub jump_pressed: bool,
    pub run_pressed: bool,
    pub run_released: bool,
    pub gun_a_released: bool,
    pub gun_b_released: bool,
    pub chest_pressed: bool,
}

impl FrameInput {
    /// Read every bound action from the keyboard state.
    pub fn sample(bindings: &InputBindings, keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            move_axis: bindings.read_move(keys),
            jump_pressed: keys.just_pressed(bindings.jump),
            run_pressed: keys.just_pressed(bindings.run),
            run_released: keys.just_released(bindings.run),
            gun_a_released: keys.just_released(bindings.gun_a),
            gun_b_released: keys.just_released(bindings.gun_b),
            chest_pressed: keys.just_pressed(bindings.open_chest),
        }
    }
}

/// Acquire the input actions when gameplay becomes active.
pub fn enable_input_actions(mut actions: ResMut<InputActions>) {
    actions.enabled = true;
    debug!("Input actions enabled");
}

/// Release the input actions and drop whatever was sampled last.
pub fn disable_input_actions(mut actions: ResMut<InputActions>, mut frame: ResMut<FrameInput>) {
    actions.enabled = false;
    *frame = FrameInput::default();
    debug!("Input actions disabled");
}

/// Sample the bound actions into [`FrameInput`].
pub fn sample_frame_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    actions: Res<InputActions>,
    mut frame: ResMut<FrameInput>,
) {
    *frame = if actions.enabled {
        FrameInput::sample(&bindings, &keys)
    } else {
        FrameInput::default()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_with(pressed: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut keys = ButtonInput::default();
        for key in pressed {
            keys.press(*key);
        }
        keys
    }

    #[test]
    fn arrows_map_to_axes() {
        let bindings = InputBindings::default();

        assert_eq!(bindings.read_move(&keys_with(&[KeyCode::ArrowUp])), Vec2::Y);
        assert_eq!(bindings.read_move(&keys_with(&[KeyCode::ArrowLeft])), Vec2::NEG_X);
        assert_eq!(
            bindings.read_move(&keys_with(&[KeyCode::ArrowUp, KeyCode::ArrowDown])),
            Vec2::ZERO
        );
    }

    #[test]
    fn diagonal_is_normalized() {
        let bindings = InputBindings::default();
        let value = bindings.read_move(&keys_with(&[KeyCode::ArrowUp, KeyCode::ArrowRight]));
        assert!((value.length() - 1.0).abs() < 1e-5);
        assert!((value.x - value.y).abs() < 1e-6);
    }

    #[test]
    fn multiple_composites_stay_in_range() {
        let wasd = CompositeBinding {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        };
        let bindings = InputBindings {
            move_axis: vec![CompositeBinding::ARROWS, wasd],
            ..default()
        };

        let value = bindings.read_move(&keys_with(&[KeyCode::ArrowUp, KeyCode::KeyW]));
        assert_eq!(value, Vec2::Y);
    }

    #[test]
    fn validate_only_repairs_empty_bindings() {
        let mut bindings = InputBindings {
            move_axis: Vec::new(),
            ..default()
        };
        assert!(bindings.validate());
        assert_eq!(bindings.move_axis, vec![CompositeBinding::ARROWS]);
        assert!(!bindings.validate());
    }

    #[test]
    fn sample_reports_edges() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::default();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::KeyE);
        keys.press(KeyCode::Digit1);
        keys.release(KeyCode::Digit1);

        let frame = FrameInput::sample(&bindings, &keys);
        assert!(frame.jump_pressed);
        assert!(frame.chest_pressed);
        assert!(frame.gun_a_released);
        assert!(!frame.gun_b_released);
        assert!(!frame.run_pressed);
    }
}
