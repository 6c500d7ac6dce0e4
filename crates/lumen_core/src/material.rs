//! Material contract for surface scattering.

use crate::sample::random_unit_vector;
use lumen_math::Vec3;
use rand::RngCore;
use std::f64::consts::PI;

/// A scattering distribution over outgoing directions.
///
/// The `theoretic` direction is the material's analytically preferred
/// outgoing direction for the incoming ray: the mirror reflection for
/// specular materials, the surface normal for diffuse ones (the cosine
/// lobe peaks there). Integrators derive it from the incoming ray and the
/// hit normal and pass it to both operations.
///
/// `possibility` is a probability density for continuous materials and a
/// discrete weight for delta materials (a perfect mirror returns 1 only
/// for `real == theoretic`); integrators must sample delta materials with
/// a single deterministic ray rather than weighting a multi-sample
/// estimator.
///
/// Materials are immutable during rendering and shared across primitives;
/// implementations must be `Send + Sync`.
pub trait Material: Send + Sync {
    /// Likelihood that a scattered ray leaves along `real` given the
    /// theoretic direction. Non-negative.
    fn possibility(&self, theoretic: Vec3, real: Vec3) -> f64;

    /// Draw one outgoing direction from the distribution.
    ///
    /// The returned direction is unit length and, for reflective
    /// materials, lies in the hemisphere about `normal`.
    fn generate(&self, normal: Vec3, theoretic: Vec3, rng: &mut dyn RngCore) -> Vec3;
}

/// Perfect mirror: all probability mass on the theoretic direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirror;

impl Material for Mirror {
    fn possibility(&self, theoretic: Vec3, real: Vec3) -> f64 {
        // Discrete indicator; equality is bit-exact on components.
        if real == theoretic {
            1.0
        } else {
            0.0
        }
    }

    fn generate(&self, _normal: Vec3, theoretic: Vec3, _rng: &mut dyn RngCore) -> Vec3 {
        theoretic
    }
}

/// Lambertian diffuse reflector: cosine-weighted scattering about the
/// normal. Its theoretic direction is the normal itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lambertian;

impl Material for Lambertian {
    fn possibility(&self, theoretic: Vec3, real: Vec3) -> f64 {
        real.dot(theoretic).max(0.0) / PI
    }

    fn generate(&self, normal: Vec3, _theoretic: Vec3, rng: &mut dyn RngCore) -> Vec3 {
        let direction = normal + random_unit_vector(rng);

        // The sum degenerates when the sample lands opposite the normal
        if direction.length_squared() < 1e-12 {
            return normal;
        }
        direction.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_mirror_generate_returns_theoretic() {
        let mut rng = StdRng::seed_from_u64(1);
        let normal = Vec3::Y;
        let theoretic = Vec3::new(0.6, 0.8, 0.0);
        assert_eq!(Mirror.generate(normal, theoretic, &mut rng), theoretic);
    }

    #[test]
    fn test_mirror_possibility_indicator() {
        let t = Vec3::new(0.6, 0.8, 0.0);
        assert_eq!(Mirror.possibility(t, t), 1.0);
        assert_eq!(Mirror.possibility(t, Vec3::Y), 0.0);

        // Bit-exact: the tiniest perturbation misses the delta
        let nudged = Vec3::new(0.6 + f64::EPSILON, 0.8, 0.0);
        assert_eq!(Mirror.possibility(t, nudged), 0.0);
    }

    #[test]
    fn test_lambertian_generate_in_hemisphere() {
        let mut rng = StdRng::seed_from_u64(2);
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        for _ in 0..1000 {
            let v = Lambertian.generate(normal, normal, &mut rng);
            assert!((v.length() - 1.0).abs() < 1e-12);
            assert!(v.dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_lambertian_possibility_density() {
        let normal = Vec3::Z;
        assert!((Lambertian.possibility(normal, normal) - 1.0 / PI).abs() < 1e-15);

        // Grazing direction has zero density, below-horizon clamps to zero
        assert_eq!(Lambertian.possibility(normal, Vec3::X), 0.0);
        assert_eq!(Lambertian.possibility(normal, -normal), 0.0);

        let oblique = Vec3::new(0.0, 1.0, 1.0).normalize();
        let expected = oblique.dot(normal) / PI;
        assert!((Lambertian.possibility(normal, oblique) - expected).abs() < 1e-15);
    }
}
