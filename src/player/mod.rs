//! Player domain: locomotion and jump controller.
//!
//! Three externally clocked phases share the player's velocity and input
//! state: input sampling and jump edges in `Update`, horizontal locomotion
//! once per `FixedUpdate` tick, and facing/animation derivation each render
//! frame. Vertical velocity is written only by the jump handlers here and by
//! gravity in the physics step, so the fixed-step integrator can overwrite
//! `vx` without ever touching `vy`.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub(crate) use components::{Facing, GameLayer, Ground, GroundProbe, Player};
pub(crate) use resources::{PlayerInput, PlayerTuning};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(
                Startup,
                (bootstrap::load_tuning, bootstrap::spawn_player).chain(),
            )
            // Event phase, then render phase. Jump edges must be handled
            // before the facing/animation derivation reads the same frame's
            // input.
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::apply_jump,
                    systems::update_facing,
                    systems::drive_animation,
                )
                    .chain(),
            )
            // Fixed phase: exactly once per physics tick.
            .add_systems(FixedUpdate, systems::apply_horizontal_movement);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
