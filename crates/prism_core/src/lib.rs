//! Prism Core - Scene description and configuration.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`, `Checkerboard`
//! - **Render settings**: resolution, field of view, eye, recursion limit
//! - **Configuration**: JSON loading with validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::Config;
//!
//! let config = Config::load("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     config.scene.sphere_count(),
//!     config.scene.light_count());
//! ```

pub mod config;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use config::{Config, ConfigError, ConfigResult};
pub use scene::{Checkerboard, Light, Material, Scene, Sphere};
pub use settings::{RenderSettings, MAX_DEPTH_LIMIT};
