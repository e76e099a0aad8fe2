//! Player domain: debug-only test room spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, Ground};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(30.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -4.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(30.0, 1.0),
        ground_layers,
    ));

    // A couple of platforms to exercise jump height tuning
    for (x, y, w) in [(-6.0, -1.0, 4.0), (5.0, 1.5, 3.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(w, 0.5)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(w, 0.5),
            ground_layers,
        ));
    }
}
