//! Player domain: unit tests for locomotion, jump edges, and derivation.

use super::components::Facing;
use super::systems::input::{jump_cut_velocity, jump_velocity};
use super::systems::movement::horizontal_velocity;
use super::systems::presentation::{derive_animation, facing_scale_x, next_facing};
use crate::animation::{AnimationFlags, AnimationState};

// -----------------------------------------------------------------------------
// Horizontal locomotion
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_velocity_tracks_axis_exactly() {
    for axis in [-1.0, -0.5, 0.0, 0.25, 0.5, 1.0] {
        assert_eq!(horizontal_velocity(axis, 8.0), axis * 8.0);
    }
    assert_eq!(horizontal_velocity(1.0, 8.0), 8.0);
    assert_eq!(horizontal_velocity(-1.0, 8.0), -8.0);
}

#[test]
fn test_neutral_axis_stops_outright() {
    // No deceleration ramp: a neutral axis zeroes vx in a single step
    assert_eq!(horizontal_velocity(0.0, 8.0), 0.0);
    assert_eq!(horizontal_velocity(0.0, 320.0), 0.0);
}

// -----------------------------------------------------------------------------
// Jump gating and jump cut
// -----------------------------------------------------------------------------

#[test]
fn test_jump_press_gated_on_ground_contact() {
    // Airborne press never changes vy
    assert_eq!(jump_velocity(false, -3.0, 12.0), -3.0);
    assert_eq!(jump_velocity(false, 5.0, 12.0), 5.0);
    assert_eq!(jump_velocity(false, 0.0, 12.0), 0.0);

    // Grounded press overwrites vy outright, never adds
    assert_eq!(jump_velocity(true, 0.0, 12.0), 12.0);
    assert_eq!(jump_velocity(true, -3.0, 12.0), 12.0);
    assert_eq!(jump_velocity(true, 20.0, 12.0), 12.0);
}

#[test]
fn test_jump_cut_scales_ascending_velocity() {
    assert_eq!(jump_cut_velocity(10.0, 0.5), 5.0);
    assert_eq!(jump_cut_velocity(12.0, 0.5), 6.0);
    assert_eq!(jump_cut_velocity(6.0, 1.0), 6.0);
    assert_eq!(jump_cut_velocity(6.0, 0.0), 0.0);
}

#[test]
fn test_jump_cut_noop_when_not_ascending() {
    // Releasing late, while falling or grounded, has no effect
    assert_eq!(jump_cut_velocity(0.0, 0.5), 0.0);
    assert_eq!(jump_cut_velocity(-4.0, 0.5), -4.0);
}

// -----------------------------------------------------------------------------
// Facing
// -----------------------------------------------------------------------------

#[test]
fn test_facing_flips_outside_deadzone() {
    assert_eq!(next_facing(Facing::Left, 0.02), Facing::Right);
    assert_eq!(next_facing(Facing::Left, 1.0), Facing::Right);
    assert_eq!(next_facing(Facing::Right, -0.02), Facing::Left);
    assert_eq!(next_facing(Facing::Right, -1.0), Facing::Left);
}

#[test]
fn test_facing_sticky_inside_deadzone() {
    // Sub-deadzone input never changes facing, no matter how often derived
    let mut facing = Facing::Right;
    for _ in 0..5 {
        facing = next_facing(facing, 0.005);
    }
    assert_eq!(facing, Facing::Right);

    assert_eq!(next_facing(Facing::Left, 0.0), Facing::Left);
    assert_eq!(next_facing(Facing::Left, 0.009), Facing::Left);
    assert_eq!(next_facing(Facing::Right, -0.009), Facing::Right);

    // The threshold itself is not "outside" (strict comparison)
    assert_eq!(next_facing(Facing::Left, 0.01), Facing::Left);
    assert_eq!(next_facing(Facing::Right, -0.01), Facing::Right);
}

#[test]
fn test_facing_mirrors_via_scale() {
    assert_eq!(facing_scale_x(Facing::Right), 1.0);
    assert_eq!(facing_scale_x(Facing::Left), -1.0);
}

// -----------------------------------------------------------------------------
// Animation derivation
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_always_jumping() {
    for axis in [-1.0, -0.005, 0.0, 0.005, 1.0] {
        assert_eq!(derive_animation(false, axis), AnimationState::Jumping);
    }
}

#[test]
fn test_grounded_walk_uses_exact_zero_check() {
    assert_eq!(derive_animation(true, 0.0), AnimationState::Idle);
    assert_eq!(derive_animation(true, 1.0), AnimationState::Walking);
    assert_eq!(derive_animation(true, -0.5), AnimationState::Walking);

    // A sub-deadzone nudge counts as walking even though it does not flip
    // facing: the walk check is exact inequality to zero, not deadzoned.
    assert_eq!(derive_animation(true, 0.005), AnimationState::Walking);
    assert_eq!(next_facing(Facing::Right, 0.005), Facing::Right);
}

#[test]
fn test_flag_resolution_prioritizes_jumping() {
    let flags = AnimationFlags {
        is_walking: true,
        is_jumping: true,
    };
    assert_eq!(flags.resolve(), AnimationState::Jumping);

    let flags = AnimationFlags {
        is_walking: true,
        is_jumping: false,
    };
    assert_eq!(flags.resolve(), AnimationState::Walking);

    assert_eq!(AnimationFlags::default().resolve(), AnimationState::Idle);
}

// -----------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_jump_then_fixed_step() {
    // Grounded, axis held right, jump pressed: vy becomes jump_power at the
    // press edge, the next fixed step sets vx, and once airborne the
    // derivation reads Jumping.
    let vy = jump_velocity(true, 0.0, 12.0);
    let vx = horizontal_velocity(1.0, 8.0);
    assert_eq!((vx, vy), (8.0, 12.0));
    assert_eq!(derive_animation(false, 1.0), AnimationState::Jumping);
}

#[test]
fn test_early_release_halves_ascent() {
    assert_eq!(jump_cut_velocity(10.0, 0.5), 5.0);
}

#[test]
fn test_walking_left_faces_left() {
    assert_eq!(next_facing(Facing::Right, -0.5), Facing::Left);
    assert_eq!(derive_animation(true, -0.5), AnimationState::Walking);
}
