//! Math utilities and types
//!
//! Provides the 2D vector type and the scalar helpers used by the sweep tests.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Sign of `value` as `-1.0` or `1.0`.
    ///
    /// Zero (and negative zero) count as positive.
    pub fn sign(value: f32) -> f32 {
        if value < 0.0 { -1.0 } else { 1.0 }
    }

    /// Component-wise ceiling
    pub fn ceil(v: Vec2) -> Vec2 {
        Vec2::new(v.x.ceil(), v.y.ceil())
    }
}
