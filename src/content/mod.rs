//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Player tuning as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfigDef {
    pub move_speed: f32,
    pub jump_power: f32,
    pub jump_cut_multiplier: f32,
    pub ground_probe_radius: f32,
    pub ground_probe_offset: (f32, f32),
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the player tuning file.
pub fn load_player_config(path: &Path) -> Result<PlayerConfigDef, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}
