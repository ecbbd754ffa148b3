//! Scene description types for Prism.
//!
//! A scene is a flat list of spheres and point lights plus an optional
//! checkerboard ground plane. It is built once before rendering and only
//! ever borrowed immutably afterwards.

use prism_math::{Interval, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};

/// Surface material for the Phong + reflection/refraction model.
///
/// The four `albedo` weights scale the diffuse, specular, reflected and
/// refracted contributions respectively. They are not required to sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction (1.0 for opaque surfaces)
    pub refractive_index: f64,

    /// Weights for diffuse, specular, reflective and refractive terms
    pub albedo: Vec4,

    /// Base diffuse color (RGB, typically 0-1)
    pub diffuse_color: Vec3,

    /// Phong shininess exponent
    pub specular_exponent: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::new(0.5, 0.5, 0.5), // Grey default
            specular_exponent: 1.0,
        }
    }
}

impl Material {
    /// Create a new material from all four parameters.
    pub fn new(refractive_index: f64, albedo: Vec4, diffuse_color: Vec3, specular_exponent: f64) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Create an opaque, purely diffuse material.
    pub fn diffuse(color: Vec3) -> Self {
        Self {
            diffuse_color: color,
            ..Default::default()
        }
    }

    /// Off-white, mostly diffuse with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::new(0.4, 0.4, 0.3), 50.0)
    }

    /// Transparent glass, mostly refractive.
    pub fn glass() -> Self {
        Self::new(1.5, Vec4::new(0.0, 0.5, 0.1, 0.8), Vec3::new(0.6, 0.7, 0.8), 125.0)
    }

    /// Matte red with a very dull highlight.
    pub fn red_rubber() -> Self {
        Self::new(1.0, Vec4::new(0.9, 0.1, 0.0, 0.0), Vec3::new(0.3, 0.1, 0.1), 10.0)
    }

    /// Near-perfect mirror with a sharp, strong highlight.
    pub fn mirror() -> Self {
        Self::new(1.0, Vec4::new(0.0, 10.0, 0.8, 0.0), Vec3::new(1.0, 1.0, 1.0), 1425.0)
    }

    /// Check the physical ranges of the parameters.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.refractive_index >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "refractive index must be >= 1, got {}",
                self.refractive_index
            )));
        }
        if self.albedo.min_element() < 0.0 || !self.albedo.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "albedo weights must be finite and non-negative, got {}",
                self.albedo
            )));
        }
        if !(self.specular_exponent > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "specular exponent must be > 0, got {}",
                self.specular_exponent
            )));
        }
        if self.albedo.element_sum() > 4.0 {
            log::warn!("Albedo weights {} sum well above 1, expect blown highlights", self.albedo);
        }
        Ok(())
    }
}

/// A sphere surface with its own copy of a material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    #[serde(default)]
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// True if `p` lies strictly inside the sphere.
    pub fn contains(&self, p: Vec3) -> bool {
        (p - self.center).length_squared() < self.radius * self.radius
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f64,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f64) -> Self {
        Self { position, intensity }
    }
}

/// Horizontal checkerboard ground plane, bounded in x and z.
///
/// The bounds, tile size and dimming are empirical values and are kept
/// configurable rather than derived.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkerboard {
    /// Plane height (y coordinate)
    pub height: f64,

    /// Open x range the plane covers
    pub x_extent: Interval,

    /// Open z range the plane covers
    pub z_extent: Interval,

    /// Tiles per world unit along x and z
    pub tile_scale: f64,

    /// Color of tiles whose index sum is odd
    pub odd_color: Vec3,

    /// Color of tiles whose index sum is even
    pub even_color: Vec3,

    /// Global multiplier applied to both tile colors
    pub dim: f64,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_extent: Interval::new(-10.0, 10.0),
            z_extent: Interval::new(-30.0, -10.0),
            tile_scale: 0.5,
            odd_color: Vec3::new(1.0, 1.0, 1.0),
            even_color: Vec3::new(1.0, 0.7, 0.3),
            dim: 0.3,
        }
    }
}

impl Checkerboard {
    /// Tile color at a point on the plane.
    pub fn color_at(&self, p: Vec3) -> Vec3 {
        let ix = (self.tile_scale * p.x).floor() as i64;
        let iz = (self.tile_scale * p.z).floor() as i64;
        let base = if (ix + iz).rem_euclid(2) == 1 {
            self.odd_color
        } else {
            self.even_color
        };
        base * self.dim
    }

    /// The material synthesized for a hit at `p`.
    pub fn material_at(&self, p: Vec3) -> Material {
        Material::diffuse(self.color_at(p))
    }
}

/// The full scene: spheres, lights and an optional ground plane.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub ground: Option<Checkerboard>,
}

impl Scene {
    /// A scene with nothing in it. Every ray misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in showcase: four spheres over a checkerboard, three lights.
    pub fn showcase() -> Self {
        Self {
            spheres: vec![
                Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::ivory()),
                Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, Material::glass()),
                Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::red_rubber()),
                Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
            ],
            lights: vec![
                Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
                Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
                Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
            ],
            ground: Some(Checkerboard::default()),
        }
    }

    /// Add a sphere to the scene.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Add a light to the scene.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Set or clear the ground plane.
    pub fn with_ground(mut self, ground: Option<Checkerboard>) -> Self {
        self.ground = ground;
        self
    }

    /// Number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Validate every entity in the scene.
    pub fn validate(&self) -> ConfigResult<()> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "sphere {} has non-positive radius {}",
                    i, sphere.radius
                )));
            }
            sphere
                .material
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("sphere {}: {}", i, e)))?;
        }

        for (i, light) in self.lights.iter().enumerate() {
            if !(light.intensity > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "light {} has non-positive intensity {}",
                    i, light.intensity
                )));
            }
            if self.spheres.iter().any(|s| s.contains(light.position)) {
                log::warn!("Light {} at {} sits inside a sphere", i, light.position);
            }
        }

        if let Some(ground) = &self.ground {
            if ground.x_extent.size() <= 0.0 || ground.z_extent.size() <= 0.0 {
                return Err(ConfigError::Invalid("ground plane extents are empty".to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_scene() {
        let scene = Scene::showcase();

        assert_eq!(scene.sphere_count(), 4);
        assert_eq!(scene.light_count(), 3);
        assert!(scene.ground.is_some());
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::empty();

        assert_eq!(scene.sphere_count(), 0);
        assert_eq!(scene.light_count(), 0);
        assert!(scene.ground.is_none());
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_checkerboard_alternates() {
        let board = Checkerboard::default();

        // floor(0.5 * 1) + floor(0.5 * -11) = 0 + -6 -> even
        let even = board.color_at(Vec3::new(1.0, -4.0, -11.0));
        // floor(0.5 * 3) + floor(0.5 * -11) = 1 + -6 -> odd
        let odd = board.color_at(Vec3::new(3.0, -4.0, -11.0));

        assert!((even - Vec3::new(0.3, 0.21, 0.09)).length() < 1e-12);
        assert!((odd - Vec3::new(0.3, 0.3, 0.3)).length() < 1e-12);
    }

    #[test]
    fn test_checkerboard_negative_coordinates() {
        let board = Checkerboard::default();

        // floor(-0.25) = -1, floor(-6) = -6 -> odd
        let color = board.color_at(Vec3::new(-0.5, -4.0, -12.0));
        assert!((color - board.odd_color * board.dim).length() < 1e-12);
    }

    #[test]
    fn test_invalid_radius() {
        let scene = Scene::empty().with_sphere(Sphere::new(Vec3::ZERO, 0.0, Material::ivory()));
        assert!(matches!(scene.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_material() {
        let mut material = Material::glass();
        material.refractive_index = 0.5;
        assert!(material.validate().is_err());

        let mut material = Material::ivory();
        material.specular_exponent = 0.0;
        assert!(material.validate().is_err());

        let mut material = Material::ivory();
        material.albedo = Vec4::new(-0.1, 0.0, 0.0, 0.0);
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_invalid_light() {
        let scene = Scene::empty().with_light(Light::new(Vec3::ZERO, 0.0));
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_sphere_contains() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default());
        assert!(sphere.contains(Vec3::new(0.0, 0.0, -5.5)));
        assert!(!sphere.contains(Vec3::ZERO));
    }
}
