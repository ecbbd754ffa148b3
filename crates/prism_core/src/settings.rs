//! Render settings: resolution, camera and recursion limits.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};

/// Largest accepted `max_depth`. Shading recurses once per bounce, so this
/// also bounds stack use.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Everything the renderer needs besides the scene itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Vertical field of view in radians
    pub fov: f64,
    /// Eye position; the camera always looks down -Z
    pub eye: Vec3,
    /// Color returned for rays that escape the scene
    pub background: Vec3,
    /// Extra bounces allowed beyond the primary ray
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: std::f64::consts::FRAC_PI_3,
            eye: Vec3::ZERO,
            background: Vec3::new(0.2, 0.7, 0.8),
            max_depth: 4,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set vertical field of view (radians).
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background = color;
        self
    }

    /// Set recursion limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Reject settings the camera cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < std::f64::consts::PI) {
            return Err(ConfigError::Invalid(format!(
                "field of view must be in (0, pi) radians, got {}",
                self.fov
            )));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }
        Ok(())
    }
}
