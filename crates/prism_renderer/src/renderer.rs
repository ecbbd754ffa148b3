//! Parallel frame rendering.
//!
//! Every pixel is independent: the scene and settings are only read, and the
//! framebuffer is split into scanlines so each rayon worker owns the rows it
//! writes.

use crate::shade::cast_ray;
use crate::tonemap::{tone_map, to_rgb8};
use crate::{Camera, Color};
use log::{debug, info};
use prism_core::{RenderSettings, Scene};
use rayon::prelude::*;

/// Row-major framebuffer of unclamped linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Tone map every pixel to packed 8-bit RGB, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&to_rgb8(tone_map(*color)));
        }
        bytes
    }
}

/// Render a single pixel: one primary ray through its center.
pub fn render_pixel(camera: &Camera, scene: &Scene, settings: &RenderSettings, x: u32, y: u32) -> Color {
    let ray = camera.primary_ray(x, y);
    cast_ray(&ray, scene, settings, 0)
}

/// Render the whole frame in parallel, one scanline per task.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Framebuffer {
    let camera = Camera::new(settings);
    let mut image = Framebuffer::new(settings.width, settings.height);
    let width = settings.width as usize;

    info!(
        "Rendering {}x{} using {} threads...",
        settings.width,
        settings.height,
        rayon::current_num_threads()
    );
    debug!(
        "Scene: {} spheres, {} lights, max depth {}",
        scene.sphere_count(),
        scene.light_count(),
        settings.max_depth
    );
    let start = std::time::Instant::now();

    if width > 0 {
        image
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = render_pixel(&camera, scene, settings, x as u32, y as u32);
                }
            });
    }

    info!("Image rendered in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Light, Material, Sphere};
    use prism_math::Vec3;

    #[test]
    fn test_framebuffer_get_set() {
        let mut image = Framebuffer::new(4, 3);
        image.set(3, 2, Color::ONE);

        assert_eq!(image.get(3, 2), Color::ONE);
        assert_eq!(image.pixels[11], Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_framebuffer_to_rgb8() {
        let mut image = Framebuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(2.0, 0.5, 0.5));

        assert_eq!(image.to_rgb8(), vec![255, 0, 128, 255, 64, 64]);
    }

    #[test]
    fn test_empty_scene_is_uniform_background() {
        let settings = RenderSettings::default().with_resolution(16, 9);
        let image = render(&Scene::empty(), &settings);

        assert_eq!(image.pixels.len(), 16 * 9);
        assert!(image.pixels.iter().all(|&c| c == settings.background));
    }

    #[test]
    fn test_render_matches_single_pixel() {
        let scene = Scene::showcase();
        let settings = RenderSettings::default().with_resolution(32, 24);
        let camera = Camera::new(&settings);

        let image = render(&scene, &settings);

        for &(x, y) in &[(0, 0), (16, 12), (31, 23), (5, 20)] {
            assert_eq!(image.get(x, y), render_pixel(&camera, &scene, &settings, x, y));
        }
    }

    #[test]
    fn test_sphere_in_center() {
        let scene = Scene::empty()
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::red_rubber()))
            .with_light(Light::new(Vec3::new(0.0, 10.0, 10.0), 1.5));
        let settings = RenderSettings::default().with_resolution(21, 21);

        let image = render(&scene, &settings);

        assert_ne!(image.get(10, 10), settings.background);
        assert_eq!(image.get(0, 0), settings.background);
    }
}
