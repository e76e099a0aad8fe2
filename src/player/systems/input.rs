//! Player domain: input sampling and jump edge handling.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GroundProbe, Player, PlayerInput, PlayerTuning};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = Vec2::new(x, 0.0);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}

/// Applies the jump impulse and the early-release jump cut.
///
/// Both are edge-triggered: holding the button across frames fires neither.
/// Grounded contact is the only gate on jumping; a press in the air is
/// dropped outright, never buffered.
pub(crate) fn apply_jump(
    spatial_query: SpatialQuery,
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &GroundProbe, &mut LinearVelocity), With<Player>>,
) {
    for (transform, probe, mut velocity) in &mut query {
        if input.jump_just_pressed {
            let grounded = probe.is_grounded(&spatial_query, transform.translation.truncate());
            velocity.y = jump_velocity(grounded, velocity.y, tuning.jump_power);
            if grounded {
                debug!("Jump: vy set to {}", velocity.y);
            }
        }

        if input.jump_just_released && velocity.y > 0.0 {
            velocity.y = jump_cut_velocity(velocity.y, tuning.jump_cut_multiplier);
            debug!("Jump cut: vy now {}", velocity.y);
        }
    }
}

/// Vertical velocity after a jump press: the impulse overwrites (never adds
/// to) the current velocity, and only fires while grounded.
pub(crate) fn jump_velocity(grounded: bool, vy: f32, jump_power: f32) -> f32 {
    if grounded { jump_power } else { vy }
}

/// Vertical velocity after a jump release: still-ascending velocity is cut
/// by the multiplier, anything else passes through (releasing late has no
/// effect).
pub(crate) fn jump_cut_velocity(vy: f32, multiplier: f32) -> f32 {
    if vy > 0.0 { vy * multiplier } else { vy }
}
