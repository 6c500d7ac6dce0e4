//! Analytic sphere primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Light, Material, EPSILON,
};
use lumen_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere given by center and radius, carrying shared references to its
/// material and optional emitter.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    light: Option<Arc<Light>>,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere. The bounding box is precomputed.
    pub fn new(
        center: Vec3,
        radius: f64,
        light: Option<Arc<Light>>,
        material: Arc<dyn Material>,
    ) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            light,
            material,
            bbox,
        }
    }
}

impl Hittable for Sphere {
    /// Solve |origin + t*direction - center|^2 = radius^2 for the smallest
    /// admissible t. Assumes a unit-length direction.
    ///
    /// Both roots must clear [`EPSILON`]: a ray scattered off the surface
    /// has its near root at zero, and the far root is the exit, accepted
    /// only when no nearer valid hit exists.
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord> {
        let co = ray.origin - self.center;
        let b = ray.direction.dot(co);
        let delta = b * b - co.length_squared() + self.radius * self.radius;
        if delta < 0.0 {
            return None;
        }

        let s = delta.sqrt();
        let near = -b - s;
        let far = -b + s;
        let dist = if near >= EPSILON && interval.contains(near) {
            near
        } else if far >= EPSILON && interval.contains(far) {
            far
        } else {
            // NaN roots from a degenerate discriminant also land here
            return None;
        };

        let point = ray.at(dist);
        Some(HitRecord {
            point,
            normal: (point - self.center) / self.radius,
            light: self.light.clone(),
            dist,
            material: Arc::clone(&self.material),
        })
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
