//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Sphere;
use prism_math::Ray;

/// Relative slack on r² allowed when a ray just grazes the sphere.
const GRAZING_EPSILON: f64 = 1e-9;

/// Distance to the nearest non-negative intersection of `ray` with `sphere`.
///
/// Uses the geometric solution: project the center onto the ray, then step
/// back and forth by the half-chord. If the near root is behind the origin
/// (origin inside the sphere) the far root is used instead. A tangent ray
/// counts as a hit.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let l = sphere.center - ray.origin();
    let tca = l.dot(ray.direction());
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;

    if d2 > r2 * (1.0 + GRAZING_EPSILON) {
        return None;
    }

    let thc = (r2 - d2).max(0.0).sqrt();
    let t0 = tca - thc;
    let t1 = tca + thc;

    let t = if t0 < 0.0 { t1 } else { t0 };
    if t < 0.0 {
        return None;
    }
    Some(t)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_max: f64) -> Option<HitRecord> {
        let t = intersect_sphere(ray, self)?;
        if t >= t_max {
            return None;
        }

        let point = ray.at(t);
        Some(HitRecord {
            t,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        })
    }
}
