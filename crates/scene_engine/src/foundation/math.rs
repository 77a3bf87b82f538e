//! Math types shared across the 2D and 3D scene stacks
//!
//! Provides the nalgebra aliases the rest of the engine builds on, the
//! floating-point `Rect` used for image source regions, and the math
//! error kind.

use thiserror::Error;

pub use nalgebra::{Matrix3, Matrix4, Point2, Point3, Rotation3};

/// 2D vector storage type
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector storage type
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3x3 homogeneous matrix type (2D transforms)
pub type Mat3 = Matrix3<f32>;

/// 4x4 homogeneous matrix type (3D transforms)
pub type Mat4 = Matrix4<f32>;

/// Errors from scalar vector arithmetic
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Scalar division with a zero divisor
    #[error("scalar division by zero")]
    DivideByZero,
}

/// Axis-aligned floating point rectangle defined by its origin, width and
/// height.
///
/// Used as the source region when drawing a sub-section of a larger image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the rectangle origin
    pub x: f32,
    /// Y coordinate of the rectangle origin
    pub y: f32,
    /// Rectangle width
    pub width: f32,
    /// Rectangle height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its origin and extents
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_default_is_empty() {
        let rect = Rect::default();
        assert_eq!(rect, Rect::new(0.0, 0.0, 0.0, 0.0));
    }
}
