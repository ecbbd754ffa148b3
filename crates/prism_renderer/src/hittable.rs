//! Hittable trait and HitRecord for ray-surface intersection.

use prism_core::{Material, Scene};
use prism_math::{Ray, Vec3};

/// Hits at or beyond this distance count as misses.
pub const MAX_DISTANCE: f64 = 1000.0;

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest hit along `ray` strictly closer than `t_max`, if any.
    fn hit(&self, ray: &Ray, t_max: f64) -> Option<HitRecord>;
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, t_max: f64) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = t_max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(ray, closest_so_far) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        // The plane only wins if it is in front of every sphere
        if let Some(ground) = &self.ground {
            if let Some(rec) = ground.hit(ray, closest_so_far) {
                closest = Some(rec);
            }
        }

        closest
    }
}

/// Find the nearest surface in the scene hit by `ray`.
///
/// Returns `None` when nothing is hit closer than [`MAX_DISTANCE`].
pub fn scene_intersect(ray: &Ray, scene: &Scene) -> Option<HitRecord> {
    scene.hit(ray, MAX_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Checkerboard, Sphere};

    fn ray_down_z() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_scene_misses() {
        assert!(scene_intersect(&ray_down_z(), &Scene::empty()).is_none());
    }

    #[test]
    fn test_nearest_sphere_wins() {
        let near = Material::ivory();
        let far = Material::red_rubber();
        let scene = Scene::empty()
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, far))
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, near));

        let rec = scene_intersect(&ray_down_z(), &scene).unwrap();

        assert!((rec.t - 9.0).abs() < 1e-9);
        assert_eq!(rec.material, near);
        assert!((rec.normal - Vec3::Z).length() < 1e-9);
        assert!((rec.point - Vec3::new(0.0, 0.0, -9.0)).length() < 1e-9);
    }

    #[test]
    fn test_far_hits_are_misses() {
        let scene = Scene::empty().with_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -2000.0),
            10.0,
            Material::ivory(),
        ));

        assert!(scene_intersect(&ray_down_z(), &scene).is_none());
    }

    #[test]
    fn test_plane_hit() {
        let scene = Scene::empty().with_ground(Some(Checkerboard::default()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -4.0));

        let rec = scene_intersect(&ray, &scene).unwrap();

        assert!((rec.point.y + 4.0).abs() < 1e-9);
        assert!((rec.point.z + 16.0).abs() < 1e-9);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_sphere_in_front_of_plane_wins() {
        let scene = Scene::empty()
            .with_ground(Some(Checkerboard::default()))
            .with_sphere(Sphere::new(Vec3::new(0.0, -2.0, -8.0), 1.0, Material::mirror()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -4.0));

        let rec = scene_intersect(&ray, &scene).unwrap();
        assert_eq!(rec.material, Material::mirror());
    }

    #[test]
    fn test_plane_in_front_of_sphere_wins() {
        // Sphere sits below the plane, behind it from the eye's view
        let scene = Scene::empty()
            .with_ground(Some(Checkerboard::default()))
            .with_sphere(Sphere::new(Vec3::new(0.0, -6.0, -24.0), 1.0, Material::mirror()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -4.0));

        let rec = scene_intersect(&ray, &scene).unwrap();
        assert_eq!(rec.normal, Vec3::Y);
        assert_ne!(rec.material, Material::mirror());
    }
}
