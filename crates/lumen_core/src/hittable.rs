//! Hittable contract and hit records for ray-object intersection.

use crate::{Light, Material};
use lumen_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// Record of a ray-object intersection.
///
/// Ephemeral, produced per query; the light and material handles are
/// cheap clones of the owning primitive's shared references.
#[derive(Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection; unit length, points outward
    pub normal: Vec3,
    /// Emitter carried by the surface, if any
    pub light: Option<Arc<Light>>,
    /// Ray parameter t at the intersection: point = origin + t * direction
    pub dist: f64,
    /// Material at the intersection point
    pub material: Arc<dyn Material>,
}

/// Trait for objects that can be hit by rays.
///
/// Implementations are immutable during the render phase, so any number
/// of threads may query the same object concurrently.
pub trait Hittable: Send + Sync {
    /// Return the nearest intersection with `ray` whose parameter lies in
    /// `interval`, or `None` if the ray misses.
    ///
    /// `ray.direction` must be non-zero.
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord>;

    /// Get the axis-aligned bounding box of this object.
    fn bounding_box(&self) -> Aabb;
}

/// A flat collection of hittable objects with a running union box.
///
/// Scenes are assembled here before a hierarchy is built over them; the
/// list itself answers queries by linear nearest-hit scan.
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox.unite(&object.bounding_box());
        self.objects.push(object);
    }

    /// Shared references to the collected objects.
    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = Aabb::EMPTY;
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for object in &self.objects {
            let max = closest.as_ref().map_or(interval.max, |rec| rec.dist);
            if let Some(rec) = object.hit(ray, Interval::new(interval.min, max)) {
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
