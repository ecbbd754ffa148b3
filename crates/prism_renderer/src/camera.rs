//! Pinhole camera for primary ray generation.

use prism_core::RenderSettings;
use prism_math::{Ray, Vec3};

/// Fixed pinhole camera looking down -Z from the eye point.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    eye: Vec3,
    // tan(fov / 2), the half-height of the image plane at distance 1
    half_height: f64,
    aspect: f64,
}

impl Camera {
    /// Create a camera from render settings.
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            image_width: settings.width,
            image_height: settings.height,
            eye: settings.eye,
            half_height: (settings.fov / 2.0).tan(),
            aspect: settings.aspect_ratio(),
        }
    }

    /// Primary ray through the center of pixel (i, j).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f64;
        let height = self.image_height as f64;

        let x = (2.0 * (i as f64 + 0.5) / width - 1.0) * self.half_height * self.aspect;
        let y = -(2.0 * (j as f64 + 0.5) / height - 1.0) * self.half_height;

        Ray::new(self.eye, Vec3::new(x, y, -1.0))
    }
}
