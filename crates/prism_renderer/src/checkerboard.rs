//! Ray intersection with the checkerboard ground plane.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Checkerboard;
use prism_math::{Ray, Vec3};

/// Rays flatter than this never hit the plane.
const PARALLEL_EPSILON: f64 = 1e-3;

impl Hittable for Checkerboard {
    fn hit(&self, ray: &Ray, t_max: f64) -> Option<HitRecord> {
        let dir = ray.direction();
        if dir.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let d = -(ray.origin().y - self.height) / dir.y;
        if d <= 0.0 || d >= t_max {
            return None;
        }

        let point = ray.at(d);
        if !self.x_extent.surrounds(point.x) || !self.z_extent.surrounds(point.z) {
            return None;
        }

        Some(HitRecord {
            t: d,
            point,
            normal: Vec3::Y,
            material: self.material_at(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_bounds() {
        let board = Checkerboard::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1.0, -4.0));

        let rec = board.hit(&ray, f64::INFINITY).unwrap();
        assert!((rec.point - Vec3::new(4.0, -4.0, -16.0)).length() < 1e-9);
        assert_eq!(rec.material.diffuse_color, board.color_at(rec.point));
        assert_eq!(rec.material.albedo.x, 1.0);
        assert_eq!(rec.material.albedo.y, 0.0);
    }

    #[test]
    fn test_parallel_ray_skipped() {
        let board = Checkerboard::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.0005, -1.0));

        assert!(board.hit(&ray, f64::INFINITY).is_none());
    }

    #[test]
    fn test_ray_pointing_up_misses() {
        let board = Checkerboard::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, -4.0));

        assert!(board.hit(&ray, f64::INFINITY).is_none());
    }

    #[test]
    fn test_outside_bounds() {
        let board = Checkerboard::default();

        // Lands at x = 12
        let wide = Ray::new(Vec3::ZERO, Vec3::new(3.0, -1.0, -4.0));
        assert!(board.hit(&wide, f64::INFINITY).is_none());

        // Lands at z = -8, in front of the board
        let short = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -2.0));
        assert!(board.hit(&short, f64::INFINITY).is_none());

        // Lands at z = -40, past the board
        let long = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -10.0));
        assert!(board.hit(&long, f64::INFINITY).is_none());
    }

    #[test]
    fn test_respects_t_max() {
        let board = Checkerboard::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -4.0));

        let rec = board.hit(&ray, f64::INFINITY).unwrap();
        assert!(board.hit(&ray, rec.t).is_none());
    }

    #[test]
    fn test_from_below() {
        let board = Checkerboard::default();
        let ray = Ray::new(Vec3::new(0.0, -8.0, 0.0), Vec3::new(0.0, 1.0, -4.0));

        let rec = board.hit(&ray, f64::INFINITY).unwrap();
        assert!((rec.point.y + 4.0).abs() < 1e-9);
    }
}
