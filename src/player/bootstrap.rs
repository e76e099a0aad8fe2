//! Player domain: tuning load and player spawn.

use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationFlags};
use crate::content;
use crate::player::{Facing, GameLayer, GroundProbe, Player, PlayerTuning};

const PLAYER_CONFIG_PATH: &str = "assets/data/player.ron";

/// Load tuning from the RON content file. A missing or malformed file is a
/// misconfiguration, not a fatal error: log it and keep the defaults.
pub(crate) fn load_tuning(mut tuning: ResMut<PlayerTuning>) {
    match content::load_player_config(Path::new(PLAYER_CONFIG_PATH)) {
        Ok(def) => {
            *tuning = PlayerTuning {
                move_speed: def.move_speed,
                jump_power: def.jump_power,
                jump_cut_multiplier: def.jump_cut_multiplier,
                ground_probe_radius: def.ground_probe_radius,
                ground_probe_offset: Vec2::new(
                    def.ground_probe_offset.0,
                    def.ground_probe_offset.1,
                ),
            };
            info!(
                "Loaded player tuning: move_speed={}, jump_power={}, jump_cut={}",
                tuning.move_speed, tuning.jump_power, tuning.jump_cut_multiplier
            );
        }
        Err(e) => warn!("{}; using default player tuning", e),
    }
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<PlayerTuning>) {
    commands.spawn((
        // Identity & controller state
        (
            Player,
            Facing::default(),
            GroundProbe {
                radius: tuning.ground_probe_radius,
                offset: tuning.ground_probe_offset,
                mask: GameLayer::Ground.into(),
            },
        ),
        // Animation collaborator
        (AnimationFlags::default(), AnimationController::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.75, 0.55, 0.35),
            custom_size: Some(Vec2::new(0.8, 1.2)),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(0.7, 1.2),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
