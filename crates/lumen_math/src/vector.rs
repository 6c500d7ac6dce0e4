//! Double-precision vector aliases and free-standing rotation helpers.

use glam::DQuat;

/// Three-component vector, read as a point, a displacement, or a color
/// depending on context.
pub type Vec3 = glam::DVec3;

/// Color alias for [`Vec3`]. Carries no semantics beyond the name.
pub type Color = Vec3;

/// Rotate `v` around `axis` by `angle` radians.
///
/// `axis` must be unit length.
pub fn rotate(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    DQuat::from_axis_angle(axis, angle) * v
}

/// Rotate `v` by `angle` radians around the line through `origin` with
/// direction `axis` (unit length).
pub fn rotate_about(v: Vec3, origin: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    rotate(v - origin, axis, angle) + origin
}
