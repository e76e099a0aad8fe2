//! Player domain: tuning and input resources.

use bevy::prelude::*;

/// Locomotion tuning. Immutable after load; out-of-range values (e.g. a
/// jump cut multiplier above 1) are not validated and simply produce
/// implausible motion.
#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    /// Horizontal speed in world units per second.
    pub move_speed: f32,
    /// Upward velocity set by a grounded jump press.
    pub jump_power: f32,
    /// Fraction of upward velocity kept when jump is released mid-ascent
    /// (0 to 1). Lower = shorter hop.
    pub jump_cut_multiplier: f32,
    pub ground_probe_radius: f32,
    pub ground_probe_offset: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_power: 12.0,
            jump_cut_multiplier: 0.5,
            ground_probe_radius: 0.2,
            ground_probe_offset: Vec2::new(0.0, -0.65),
        }
    }
}

/// Input sampled once per render frame. Only the x component of the axis
/// drives locomotion; the axis stays a Vec2 to match the input surface.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}
