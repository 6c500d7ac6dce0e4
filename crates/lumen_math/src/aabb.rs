use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box used for hierarchy pruning.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D
/// volume. The canonical empty box carries the empty interval on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Create an AABB from two corner points (component-wise min/max).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        }
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Grow self to the union with another AABB.
    pub fn unite(&mut self, other: &Aabb) {
        self.x.unite(&other.x);
        self.y.unite(&other.y);
        self.z.unite(&other.z);
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest
    /// extent. Ties resolve to the lexically first axis.
    pub fn longest_axis(&self) -> usize {
        let x_length = self.x.length();
        let y_length = self.y.length();
        let z_length = self.z.length();

        if x_length >= y_length && x_length >= z_length {
            0
        } else if y_length >= z_length {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Vec3 {
        Vec3::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Slab method: the running interval is intersected with the per-axis
    /// entry/exit parameters; the box is hit iff it stays non-empty. A
    /// zero direction component divides to signed infinities (NaN only
    /// when the origin sits exactly on the slab plane, which the interval
    /// intersection ignores), so no parallel-ray branch is needed. A
    /// grazing hit with entry == exit still counts as a hit.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let (origin, dir) = match axis {
                0 => (ray.origin.x, ray.direction.x),
                1 => (ray.origin.y, ray.direction.y),
                _ => (ray.origin.z, ray.direction.z),
            };

            let t0 = (slab.min - origin) / dir;
            let t1 = (slab.max - origin) / dir;
            let crossing = if dir.is_sign_negative() {
                Interval::new(t1, t0)
            } else {
                Interval::new(t0, t1)
            };

            ray_t.intersect(&crossing);
            if ray_t.is_empty() {
                return false;
            }
        }
        true
    }

    /// An empty AABB (contains nothing).
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// A universe AABB (contains everything).
    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}
