//! Recursive Whitted shading.
//!
//! Each hit is lit with Phong diffuse and specular terms from every
//! unoccluded point light, then mixed with the colors seen along the
//! reflected and refracted rays. Recursion stops after
//! `RenderSettings::max_depth` extra bounces, never more than
//! `MAX_DEPTH_LIMIT`.

use crate::hittable::{scene_intersect, HitRecord};
use crate::Color;
use prism_core::{RenderSettings, Scene, MAX_DEPTH_LIMIT};
use prism_math::{Ray, Vec3};

/// Offset applied to secondary ray origins to avoid self-intersection.
pub const SURFACE_BIAS: f64 = 1e-3;

/// Lights closer than this to a shaded point have no usable direction.
const MIN_LIGHT_DISTANCE: f64 = 1e-12;

/// Accumulated light intensities at a surface point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Illumination {
    /// Sum of intensity * max(0, N.L) over visible lights
    pub diffuse: f64,
    /// Sum of Phong highlight terms over visible lights
    pub specular: f64,
}

/// Compute the color seen along `ray`.
///
/// `depth` counts bounces so far, starting at 0 for the primary ray. Once it
/// exceeds `settings.max_depth` (capped at `MAX_DEPTH_LIMIT` for settings
/// that skipped validation) the background is returned without touching
/// the scene.
pub fn cast_ray(ray: &Ray, scene: &Scene, settings: &RenderSettings, depth: u32) -> Color {
    if depth > settings.max_depth.min(MAX_DEPTH_LIMIT) {
        return settings.background;
    }

    let Some(hit) = scene_intersect(ray, scene) else {
        return settings.background;
    };

    let dir = ray.direction();
    let n = hit.normal;
    let material = &hit.material;

    let reflect_dir = reflect(dir, n).normalize();
    let reflect_ray = Ray::from_unit(offset_origin(hit.point, n, reflect_dir), reflect_dir);
    let reflect_color = cast_ray(&reflect_ray, scene, settings, depth + 1);

    // Total internal reflection leaves nothing to transmit
    let refract_color = match refract(dir, n, material.refractive_index) {
        Some(refract_dir) => {
            let refract_ray = Ray::from_unit(offset_origin(hit.point, n, refract_dir), refract_dir);
            cast_ray(&refract_ray, scene, settings, depth + 1)
        }
        None => Color::ZERO,
    };

    let light = illuminate(&hit, dir, scene);
    let albedo = material.albedo;

    material.diffuse_color * light.diffuse * albedo.x
        + Color::ONE * light.specular * albedo.y
        + reflect_color * albedo.z
        + refract_color * albedo.w
}

/// Sum the diffuse and specular light reaching `hit`, seen along `view_dir`.
///
/// A light contributes nothing when the shadow ray toward it hits another
/// surface closer than the light itself. A light sitting on the point is
/// skipped.
pub fn illuminate(hit: &HitRecord, view_dir: Vec3, scene: &Scene) -> Illumination {
    let n = hit.normal;
    let mut total = Illumination::default();

    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        if light_distance <= MIN_LIGHT_DISTANCE {
            continue;
        }
        let light_dir = to_light / light_distance;

        let shadow_origin = offset_origin(hit.point, n, light_dir);
        let shadow_ray = Ray::from_unit(shadow_origin, light_dir);
        if let Some(blocker) = scene_intersect(&shadow_ray, scene) {
            if (blocker.point - shadow_origin).length() < light_distance {
                continue;
            }
        }

        total.diffuse += light.intensity * light_dir.dot(n).max(0.0);
        total.specular += light.intensity
            * reflect(light_dir, n)
                .dot(view_dir)
                .max(0.0)
                .powf(hit.material.specular_exponent);
    }

    total
}

/// Nudge `point` off the surface toward the side `direction` points to.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * SURFACE_BIAS
    } else {
        point + normal * SURFACE_BIAS
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface using Snell's law.
///
/// `normal` is the outward surface normal and `refractive_index` the index
/// of the material behind it (the outside is assumed to be 1). When the ray
/// is leaving the material the indices are swapped and the normal flipped.
/// Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f64) -> Option<Vec3> {
    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = refractive_index;
    let mut n = normal;

    if cos_i < 0.0 {
        // Inside the object
        cos_i = -cos_i;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some((incident * eta + n * (eta * cos_i - k.sqrt())).normalize())
}
