//! Bounding-volume hierarchy over hittable primitives.
//!
//! A binary tree whose leaves reference primitives and whose internal
//! nodes cache the union of their descendants' boxes. The tree is itself
//! a [`Hittable`], so sub-hierarchies compose and can be reused.

use crate::{HitRecord, Hittable};
use lumen_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while building a hierarchy.
#[derive(Error, Debug)]
pub enum BvhError {
    #[error("cannot build a hierarchy over an empty primitive list")]
    EmptyScene,
}

/// A hierarchy node: one or two shared children and their cached box.
///
/// Built once over an immutable scene; queries are read-only and safe to
/// run from many threads at once.
pub struct BvhTree {
    left: Arc<dyn Hittable>,
    right: Option<Arc<dyn Hittable>>,
    bbox: Aabb,
}

impl std::fmt::Debug for BvhTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BvhTree").field("bbox", &self.bbox).finish_non_exhaustive()
    }
}

impl BvhTree {
    /// Build a hierarchy over the given primitives.
    ///
    /// The tree retains shared references; callers keep their own. An
    /// empty slice is rejected.
    pub fn new(objects: &[Arc<dyn Hittable>]) -> Result<Self, BvhError> {
        if objects.is_empty() {
            return Err(BvhError::EmptyScene);
        }
        log::debug!("building hierarchy over {} primitives", objects.len());
        Ok(Self::build(objects.to_vec()))
    }

    /// Recursive median-split construction.
    ///
    /// Sorts the input by box center along the longest axis of the union
    /// box and splits at the median. The sort is destructive on the local
    /// working list.
    fn build(mut objects: Vec<Arc<dyn Hittable>>) -> Self {
        let n = objects.len();

        if n == 1 {
            let left = objects.swap_remove(0);
            let bbox = left.bounding_box();
            return Self {
                left,
                right: None,
                bbox,
            };
        }

        if n == 2 {
            let right = objects.swap_remove(1);
            let left = objects.swap_remove(0);
            let bbox = Aabb::surrounding(&left.bounding_box(), &right.bounding_box());
            return Self {
                left,
                right: Some(right),
                bbox,
            };
        }

        let bounds = objects.iter().fold(Aabb::EMPTY, |acc, o| {
            Aabb::surrounding(&acc, &o.bounding_box())
        });

        // Longest extent wins; ties resolve x before y before z
        let axis = bounds.longest_axis();

        objects.sort_unstable_by(|a, b| {
            let a_centroid = a.bounding_box().centroid();
            let b_centroid = b.bounding_box().centroid();
            let a_val = match axis {
                0 => a_centroid.x,
                1 => a_centroid.y,
                _ => a_centroid.z,
            };
            let b_val = match axis {
                0 => b_centroid.x,
                1 => b_centroid.y,
                _ => b_centroid.z,
            };
            a_val
                .partial_cmp(&b_val)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let right_objects = objects.split_off(n / 2);
        let left_objects = objects;

        Self {
            left: Arc::new(Self::build(left_objects)),
            right: Some(Arc::new(Self::build(right_objects))),
            bbox: bounds,
        }
    }
}

impl Hittable for BvhTree {
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord> {
        debug_assert!(
            ray.direction != Vec3::ZERO,
            "ray direction must be non-zero"
        );

        if !self.bbox.hit(ray, interval) {
            return None;
        }

        let left_hit = self.left.hit(ray, interval);

        let Some(right) = &self.right else {
            return left_hit;
        };

        // A hit on the left shrinks the interval the right child can beat
        let right_t = match &left_hit {
            Some(rec) => Interval::new(interval.min, rec.dist),
            None => interval,
        };

        match right.hit(ray, right_t) {
            Some(rec) => Some(rec),
            None => left_hit,
        }
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Material, Sphere, EPSILON};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn forever() -> Interval {
        Interval::new(EPSILON, f64::INFINITY)
    }

    fn sphere(center: Vec3, radius: f64, material: &Arc<dyn Material>) -> Arc<dyn Hittable> {
        Arc::new(Sphere::new(center, radius, None, Arc::clone(material)))
    }

    fn random_scene(rng: &mut StdRng, n: usize) -> Vec<Arc<dyn Hittable>> {
        let material: Arc<dyn Material> = Arc::new(Lambertian);
        (0..n)
            .map(|_| {
                let center = Vec3::new(
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                );
                sphere(center, rng.gen_range(0.1..1.0), &material)
            })
            .collect()
    }

    fn random_ray(rng: &mut StdRng) -> Ray {
        let origin = Vec3::new(
            rng.gen_range(-25.0..25.0),
            rng.gen_range(-25.0..25.0),
            rng.gen_range(-25.0..25.0),
        );
        Ray::new(origin, crate::random_unit_vector(rng))
    }

    #[test]
    fn test_bvh_empty_rejected() {
        let err = BvhTree::new(&[]).expect_err("empty scene must be rejected");
        assert!(matches!(err, BvhError::EmptyScene));
    }

    #[test]
    fn test_bvh_single_sphere_leaf() {
        let material: Arc<dyn Material> = Arc::new(Lambertian);
        let objects = vec![sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, &material)];
        let bvh = BvhTree::new(&objects).expect("non-empty");

        assert_eq!(bvh.bounding_box(), objects[0].bounding_box());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = bvh.hit(&ray, forever()).expect("hit");
        assert!((rec.dist - 4.0).abs() < 1e-9);

        // Missing ray is pruned by the cached box
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(bvh.hit(&ray, forever()).is_none());
    }

    #[test]
    fn test_bvh_nearest_of_two() {
        let material: Arc<dyn Material> = Arc::new(Lambertian);
        let near = sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, &material);
        let far = sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, &material);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        for order in [vec![near.clone(), far.clone()], vec![far, near]] {
            let bvh = BvhTree::new(&order).expect("non-empty");
            let rec = bvh.hit(&ray, forever()).expect("hit");
            assert!((rec.dist - 4.0).abs() < 1e-9, "returned the far sphere");
        }
    }

    #[test]
    fn test_bvh_matches_linear_scan() {
        let mut rng = StdRng::seed_from_u64(11);
        let objects = random_scene(&mut rng, 300);

        let mut list = HittableList::new();
        for object in &objects {
            list.add(Arc::clone(object));
        }
        let bvh = BvhTree::new(&objects).expect("non-empty");

        let mut hits = 0;
        for _ in 0..5000 {
            let ray = random_ray(&mut rng);
            let from_bvh = bvh.hit(&ray, forever());
            let from_scan = list.hit(&ray, forever());

            match (from_bvh, from_scan) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    hits += 1;
                    assert!((a.dist - b.dist).abs() < 1e-12);
                    assert_eq!(a.point, b.point);
                    assert_eq!(a.normal, b.normal);
                }
                (a, b) => panic!(
                    "bvh and scan disagree: bvh={:?} scan={:?}",
                    a.map(|r| r.dist),
                    b.map(|r| r.dist)
                ),
            }
        }
        assert!(hits > 0, "test scene produced no hits at all");
    }

    #[test]
    fn test_bvh_order_invariant() {
        let mut rng = StdRng::seed_from_u64(13);
        let objects = random_scene(&mut rng, 64);

        let mut reversed = objects.clone();
        reversed.reverse();
        let forward = BvhTree::new(&objects).expect("non-empty");
        let backward = BvhTree::new(&reversed).expect("non-empty");

        assert_eq!(forward.bounding_box(), backward.bounding_box());

        for _ in 0..2000 {
            let ray = random_ray(&mut rng);
            let a = forward.hit(&ray, forever());
            let b = backward.hit(&ray, forever());
            match (a, b) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_eq!(a.dist, b.dist);
                    assert_eq!(a.point, b.point);
                    assert_eq!(a.normal, b.normal);
                    assert!(Arc::ptr_eq(&a.material, &b.material));
                }
                _ => panic!("hierarchies built from permuted input disagree"),
            }
        }
    }

    #[test]
    fn test_bvh_hit_postconditions() {
        let mut rng = StdRng::seed_from_u64(17);
        let objects = random_scene(&mut rng, 100);
        let bvh = BvhTree::new(&objects).expect("non-empty");

        let interval = Interval::new(EPSILON, 60.0);
        for _ in 0..2000 {
            let ray = random_ray(&mut rng);
            if let Some(rec) = bvh.hit(&ray, interval) {
                assert!(interval.contains(rec.dist));
                assert!((rec.normal.length() - 1.0).abs() < 1e-12);
                let reconstructed = ray.at(rec.dist);
                assert!(
                    (rec.point - reconstructed).length() <= 1e-9 * (1.0 + rec.dist.abs()),
                    "hit point drifted from origin + t * direction"
                );
            }
        }
    }

    #[test]
    fn test_bvh_subtree_reuse() {
        // A built tree is a Hittable like any other and can be composed.
        let material: Arc<dyn Material> = Arc::new(Lambertian);
        let cluster: Vec<Arc<dyn Hittable>> = vec![
            sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, &material),
            sphere(Vec3::new(3.0, 0.0, -5.0), 1.0, &material),
        ];
        let subtree: Arc<dyn Hittable> = Arc::new(BvhTree::new(&cluster).expect("non-empty"));

        let objects = vec![
            Arc::clone(&subtree),
            sphere(Vec3::new(0.0, 0.0, -20.0), 1.0, &material),
        ];
        let root = BvhTree::new(&objects).expect("non-empty");

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = root.hit(&ray, forever()).expect("hit through subtree");
        assert!((rec.dist - 4.0).abs() < 1e-9);
    }
}
