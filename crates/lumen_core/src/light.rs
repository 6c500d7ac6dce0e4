use lumen_math::Color;

/// A light-emitting surface attribute.
///
/// Emission is constant over the surface carrying it; the emitted
/// radiance is `color * brightness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Color,
    /// Non-negative scalar multiplier on `color`.
    pub brightness: f64,
}

impl Light {
    /// Create a new emitter.
    pub fn new(color: Color, brightness: f64) -> Self {
        Self {
            color,
            brightness: brightness.max(0.0),
        }
    }

    /// The emitted radiance, `color * brightness`.
    pub fn radiance(&self) -> Color {
        self.color * self.brightness
    }
}
