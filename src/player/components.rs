//! Player domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Which way the character sprite points. Sticky: only flips when the
/// horizontal axis leaves the deadzone.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Disc probe anchored at the character's feet, used for ground contact.
///
/// The probe is configuration, not derived from the collider shape: radius
/// and anchor offset come from tuning so feet placement can be adjusted
/// independently of the body.
#[derive(Component, Debug, Clone)]
pub struct GroundProbe {
    /// Probe disc radius in world units.
    pub radius: f32,
    /// Anchor offset from the character origin (points at the feet).
    pub offset: Vec2,
    /// Layers considered "ground".
    pub mask: LayerMask,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            radius: 0.2,
            offset: Vec2::new(0.0, -0.65),
            mask: GameLayer::Ground.into(),
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
