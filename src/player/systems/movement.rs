//! Player domain: fixed-step horizontal locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{Player, PlayerInput, PlayerTuning};

/// Runs once per fixed tick. Horizontal velocity is instantaneous: the axis
/// value maps straight to speed with no acceleration ramp and no air-control
/// penalty. Vertical velocity belongs to the jump handlers and gravity and
/// is left alone here.
pub(crate) fn apply_horizontal_movement(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.x = horizontal_velocity(input.axis.x, tuning.move_speed);
    }
}

pub(crate) fn horizontal_velocity(axis: f32, move_speed: f32) -> f32 {
    axis * move_speed
}
