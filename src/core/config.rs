//! Viewer configuration
//!
//! Every section has defaults, so a config file only needs the fields it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::scene::SceneConfig;

/// Window configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glade".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Top-level configuration for the viewer binary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
}

impl ViewerConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the terrain generator cannot build
    pub fn validate(&self) -> Result<()> {
        let terrain = &self.scene.terrain;
        if terrain.width < 2 || terrain.depth < 2 {
            return Err(Error::InvalidConfig(format!(
                "terrain grid must be at least 2x2, got {}x{}",
                terrain.width, terrain.depth
            )));
        }
        // Vertex indices are u32
        if terrain.width.checked_mul(terrain.depth).is_none() {
            return Err(Error::InvalidConfig(format!(
                "terrain grid {}x{} has too many vertices",
                terrain.width, terrain.depth
            )));
        }
        Ok(())
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
