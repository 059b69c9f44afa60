//! Editor configuration
//!
//! Read from `editor.ron` in the working directory. Every field has a
//! default, so the file may list only what it changes.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

/// Config file looked up at startup
pub const CONFIG_FILE: &str = "editor.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Camera pan per frame while an arrow key is held
    pub scroll_speed: f32,
    /// Directory map files are read from and written to
    pub maps_dir: PathBuf,
    pub font_size: f32,
    /// Seconds a status message stays visible
    pub status_duration: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Vector Map Editor".to_string(),
            window_width: 640,
            window_height: 480,
            scroll_speed: 10.0,
            maps_dir: PathBuf::from("maps"),
            font_size: 20.0,
            status_duration: 3.0,
        }
    }
}

impl EditorConfig {
    /// Parse a config from RON text
    pub fn parse(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Load the config file, falling back to defaults
    ///
    /// A missing file is normal; a malformed one is reported in the error
    /// string alongside the defaults so the caller can log it.
    pub fn load<P: AsRef<Path>>(path: P) -> (Self, Option<String>) {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => (config, None),
                Err(e) => (
                    Self::default(),
                    Some(format!("Ignoring {}: {}", path.display(), e)),
                ),
            },
            Err(_) => (Self::default(), None),
        }
    }
}
