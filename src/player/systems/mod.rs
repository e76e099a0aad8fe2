//! Player domain: system modules for locomotion updates.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod presentation;

pub(crate) use input::{apply_jump, read_input};
pub(crate) use movement::apply_horizontal_movement;
pub(crate) use presentation::{drive_animation, update_facing};
