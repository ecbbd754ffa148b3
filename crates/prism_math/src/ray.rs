use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// Rays are used for raytracing - they represent a half-line starting at
/// `origin` and traveling along `direction`. Intersection and shading code
/// assumes `direction` is normalized; [`Ray::new`] takes care of that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray whose direction is already known to be unit length.
    #[inline]
    pub fn from_unit(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!((direction.length_squared() - 1.0).abs() < 1e-6);
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
