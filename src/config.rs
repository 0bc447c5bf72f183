// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::constants::DEFAULT_MEDIA_DIR;
use crate::resize::ResizeBounds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for stored captures (None = platform pictures directory)
    pub photos_root: Option<PathBuf>,
    /// Directory for captures whose options carry no directory of their own,
    /// relative to the photos root
    pub media_dir: PathBuf,
    /// Bounds applied when resizing captures for upload
    pub resize_bounds: ResizeBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos_root: None, // Resolved against the pictures directory at use
            media_dir: PathBuf::from(DEFAULT_MEDIA_DIR),
            resize_bounds: ResizeBounds::default(),
        }
    }
}

impl Config {
    /// Location of the persisted configuration file
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("media-picker").join("config.json"))
    }

    /// Load the configuration, falling back to defaults
    ///
    /// A missing or malformed file is not an error; it logs a warning and
    /// yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "malformed config, using defaults");
                Self::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the configuration as JSON
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, contents)
    }

    /// Persist to the default configuration location
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
        })?;
        self.save_to(&path)
    }
}
