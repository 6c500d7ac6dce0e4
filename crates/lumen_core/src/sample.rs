//! Random-direction sampling utilities.
//!
//! Both samplers are parameterized by the caller's generator; the crate
//! keeps no random state of its own, so threads with distinct generators
//! can sample concurrently.

use lumen_math::Vec3;
use rand::{Rng, RngCore};
use std::f64::consts::PI;

/// A point sampled uniformly on the unit sphere.
///
/// Inverse-CDF construction: z = 1 - 2b is uniform on [-1, 1], the ring
/// radius at that height is 2 * sqrt(b(1 - b)), and the azimuth is uniform
/// over the full circle. Area-uniform, with no bias toward the poles.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let b: f64 = rng.gen();
    let u: f64 = rng.gen_range(-1.0..1.0);

    let z = 1.0 - 2.0 * b;
    let r = 2.0 * (b * (1.0 - b)).sqrt();
    let phi = PI * u;

    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// A unit vector sampled uniformly on the hemisphere about `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let v = random_unit_vector(rng);
    if v.dot(normal) > 0.0 {
        v
    } else {
        -v
    }
}
