mod interval;
pub use interval::Interval;

mod aabb;
pub use aabb::Aabb;

mod ray;
pub use ray::Ray;

mod vector;
pub use vector::{rotate, rotate_about, Color, Vec3};
