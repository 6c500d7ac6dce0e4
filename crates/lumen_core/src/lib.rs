//! Scene-intersection and sampling core for CPU ray tracing.
//!
//! Provides the analytic primitives, the bounding-volume hierarchy that
//! accelerates nearest-hit queries, the material-scattering contract used
//! by path integration, and the random-direction sampling utilities both
//! rely on. Camera projection, pixel iteration and image output are the
//! surrounding program's job; this crate knows rays, not pixels.
//!
//! Scenes are built once and are immutable afterwards: any number of
//! threads may traverse the same hierarchy concurrently, each supplying
//! its own random generator.

mod bvh;
mod hittable;
mod light;
mod material;
mod sample;
mod sphere;

pub use bvh::{BvhError, BvhTree};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use light::Light;
pub use material::{Lambertian, Material, Mirror};
pub use sample::{random_on_hemisphere, random_unit_vector};
pub use sphere::Sphere;

/// Re-export common math types from lumen_math
pub use lumen_math::{Aabb, Color, Interval, Ray, Vec3};

/// Smallest accepted ray parameter, in scene units.
///
/// Rays scattered off a surface start exactly on it; a root below this
/// floor is self-intersection noise and is rejected.
pub const EPSILON: f64 = 1e-4;
