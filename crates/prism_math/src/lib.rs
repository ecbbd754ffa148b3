//! Prism math types.
//!
//! Everything in the tracer runs in double precision, so the vector
//! aliases point at glam's `f64` types.

pub use glam::{DVec3, DVec4};

/// 3-component vector used for points, directions and colors.
pub type Vec3 = DVec3;

/// 4-component vector, used for the material albedo weights.
pub type Vec4 = DVec4;

mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;
