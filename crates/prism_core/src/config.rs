//! Loading render configuration from JSON.
//!
//! A config file bundles the render settings and the scene:
//!
//! ```json
//! {
//!   "render": { "width": 640, "height": 480, "max_depth": 4 },
//!   "scene": {
//!     "spheres": [{ "center": [0, 0, -16], "radius": 2 }],
//!     "lights": [{ "position": [-20, 20, 20], "intensity": 1.5 }],
//!     "ground": null
//!   }
//! }
//! ```
//!
//! A missing `render` or `scene` section falls back to the built-in
//! defaults. Inside a `scene` section, missing lists are empty and a
//! missing `ground` means no plane.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::Scene;
use crate::settings::RenderSettings;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render settings plus the scene they apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderSettings,
    pub scene: Scene,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            scene: Scene::showcase(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading config: {:?}", path);

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;

        log::info!(
            "Loaded scene: {} spheres, {} lights, ground plane {}",
            config.scene.sphere_count(),
            config.scene.light_count(),
            if config.scene.ground.is_some() { "on" } else { "off" }
        );
        log::debug!("Render settings: {:?}", config.render);

        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate both the settings and the scene.
    pub fn validate(&self) -> ConfigResult<()> {
        self.render.validate()?;
        self.scene.validate()
    }
}
