//! Player domain: render-step facing and animation derivation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationFlags, AnimationState};
use crate::player::{Facing, GroundProbe, Player, PlayerInput};

/// Deadzone for facing only. The walk/idle animation check deliberately
/// uses an exact zero comparison instead (see `derive_animation`).
const FACING_DEADZONE: f32 = 0.01;

pub(crate) fn update_facing(
    input: Res<PlayerInput>,
    mut query: Query<(&mut Facing, &mut Transform), With<Player>>,
) {
    for (mut facing, mut transform) in &mut query {
        let next = next_facing(*facing, input.axis.x);
        if next != *facing {
            *facing = next;
        }
        // Mirror via scale, not rotation.
        transform.scale.x = facing_scale_x(*facing);
    }
}

/// Derives the animation state from one grounded reading and pushes it to
/// the animation flags. A single probe call drives both the jump-flag clear
/// and the walk/idle decision, so the two can never disagree within one
/// derivation.
pub(crate) fn drive_animation(
    spatial_query: SpatialQuery,
    input: Res<PlayerInput>,
    mut query: Query<(&Transform, &GroundProbe, &mut AnimationFlags), With<Player>>,
) {
    for (transform, probe, mut flags) in &mut query {
        let grounded = probe.is_grounded(&spatial_query, transform.translation.truncate());

        match derive_animation(grounded, input.axis.x) {
            AnimationState::Jumping => {
                // Airborne: the walking flag is left as-is.
                flags.is_jumping = true;
            }
            AnimationState::Walking => {
                flags.is_jumping = false;
                flags.is_walking = true;
            }
            AnimationState::Idle => {
                flags.is_jumping = false;
                flags.is_walking = false;
            }
        }
    }
}

/// Sticky facing: inside the deadzone the previous facing is kept.
pub(crate) fn next_facing(current: Facing, axis: f32) -> Facing {
    if axis > FACING_DEADZONE {
        Facing::Right
    } else if axis < -FACING_DEADZONE {
        Facing::Left
    } else {
        current
    }
}

pub(crate) fn facing_scale_x(facing: Facing) -> f32 {
    match facing {
        Facing::Right => 1.0,
        Facing::Left => -1.0,
    }
}

/// Airborne always reads as Jumping. Grounded reads as Walking on any
/// non-zero axis value, exact inequality: a sub-deadzone nudge walks
/// without flipping facing.
pub(crate) fn derive_animation(grounded: bool, axis: f32) -> AnimationState {
    if !grounded {
        AnimationState::Jumping
    } else if axis != 0.0 {
        AnimationState::Walking
    } else {
        AnimationState::Idle
    }
}
