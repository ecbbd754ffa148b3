//! Prism Renderer - Whitted-style recursive ray tracing.
//!
//! Finds the nearest sphere or ground-plane hit for each ray, shades it with
//! Phong lighting and hard shadows, and follows reflection and refraction
//! rays down to a fixed depth. Pixels are rendered in parallel by scanline.

mod hittable;
mod sphere;
mod checkerboard;
mod shade;
mod camera;
mod renderer;
mod tonemap;
mod output;

pub use hittable::{HitRecord, Hittable, scene_intersect, MAX_DISTANCE};
pub use sphere::intersect_sphere;
pub use shade::{cast_ray, illuminate, offset_origin, reflect, refract, Illumination, SURFACE_BIAS};
pub use camera::Camera;
pub use renderer::{Framebuffer, render, render_pixel};
pub use tonemap::{tone_map, to_rgb8};
pub use output::{ImageWriter, OutputError, OutputFormat, OutputResult, save, write_image, write_png, write_ppm};

/// Re-export the vector types from prism_math
pub use prism_math::{Ray, Vec3, Vec4};

/// Color type alias (RGB, unbounded until tone mapping)
pub type Color = Vec3;
