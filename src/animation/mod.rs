//! Animation state machine and playback.
//!
//! Resolves the boolean flags driven by the locomotion controller into a
//! discrete animation state and steps frames over time.

use bevy::prelude::*;

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    Jumping,
}

/// Named boolean flags set by the locomotion controller each render frame.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimationFlags {
    pub is_walking: bool,
    pub is_jumping: bool,
}

impl AnimationFlags {
    /// Resolve flags into a single state. Jumping wins over walking, so a
    /// stale walking flag left over from takeoff never shows through.
    pub fn resolve(&self) -> AnimationState {
        if self.is_jumping {
            AnimationState::Jumping
        } else if self.is_walking {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        }
    }
}

/// Component for animation playback on a sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15, // ~6-7 FPS for retro feel
            looping: true,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting the frame if the state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;

            self.looping = matches!(state, AnimationState::Idle | AnimationState::Walking);

            self.total_frames = match state {
                AnimationState::Idle => 4,
                AnimationState::Walking => 4,
                AnimationState::Jumping => 2,
            };
        }
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (sync_animation_state, update_animation_frames).chain(),
        );
    }
}

fn sync_animation_state(mut query: Query<(&AnimationFlags, &mut AnimationController)>) {
    for (flags, mut controller) in &mut query {
        controller.set_state(flags.resolve());
    }
}

fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    let dt = time.delta_secs();

    for mut controller in &mut query {
        controller.frame_timer += dt;

        while controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;

            let next = controller.current_frame + 1;
            if next < controller.total_frames {
                controller.current_frame = next;
            } else if controller.looping {
                controller.current_frame = 0;
            }
        }
    }
}
