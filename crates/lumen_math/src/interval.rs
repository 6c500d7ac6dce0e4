/// Closed scalar range [min, max] over f64.
///
/// The canonical empty interval is [+inf, -inf] and the universal interval
/// is [-inf, +inf]; both are available as associated constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the interval (max - min).
    ///
    /// Negative for empty intervals; callers must treat a negative length
    /// as empty.
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if the interval contains no values (min > max).
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Shrink self to the intersection with another interval.
    ///
    /// NaN endpoints on `other` impose no constraint (`f64::max`/`min`
    /// ignore them), which is what the ray slab test relies on.
    pub fn intersect(&mut self, other: &Interval) {
        self.min = self.min.max(other.min);
        self.max = self.max.min(other.max);
    }

    /// Grow self to the union with another interval.
    pub fn unite(&mut self, other: &Interval) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Creates an interval that surrounds two other intervals.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };
}
