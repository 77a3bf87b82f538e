//! Immutable 2D vector value type

use crate::foundation::math::{MathError, Vec2};
use std::ops::{Div, Mul};

/// An immutable 2D point or offset.
///
/// Every operation returns a new value; two vectors with equal components
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    inner: Vec2,
}

impl Vector2 {
    /// Create a vector from explicit components
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            inner: Vec2::new(x, y),
        }
    }

    /// The zero vector (0, 0)
    pub fn zero() -> Self {
        Self::default()
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// Scalar division that reports a zero divisor instead of producing
    /// non-finite components.
    ///
    /// # Errors
    /// Returns [`MathError::DivideByZero`] when `divisor` is zero.
    pub fn checked_div(self, divisor: f32) -> Result<Self, MathError> {
        if divisor == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(Self {
            inner: self.inner / divisor,
        })
    }

    pub(crate) fn to_na(self) -> Vec2 {
        self.inner
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            inner: self.inner * scalar,
        }
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    /// Scalar division. Division by zero is the caller's responsibility;
    /// debug builds assert on it.
    fn div(self, divisor: f32) -> Self {
        debug_assert!(divisor != 0.0, "Vector2 scalar division by zero");
        Self {
            inner: self.inner / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let v = Vector2::default();
        assert_eq!(v, Vector2::zero());
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
    }

    #[test]
    fn test_scalar_multiply_returns_new_value() {
        let v = Vector2::new(1.5, -2.0);
        let scaled = v * 2.0;
        assert_eq!(scaled, Vector2::new(3.0, -4.0));
        assert_eq!(v, Vector2::new(1.5, -2.0));
    }

    #[test]
    fn test_scalar_divide() {
        let v = Vector2::new(9.0, 3.0);
        assert_eq!(v / 3.0, Vector2::new(3.0, 1.0));
    }

    #[test]
    fn test_checked_div_reports_zero_divisor() {
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(v.checked_div(0.0), Err(MathError::DivideByZero));
        assert_eq!(v.checked_div(2.0), Ok(Vector2::new(0.5, 0.5)));
    }

    #[test]
    fn test_equality_is_component_wise() {
        assert_eq!(Vector2::new(1.0, 2.0), Vector2::new(1.0, 2.0));
        assert_ne!(Vector2::new(1.0, 2.0), Vector2::new(2.0, 1.0));
    }
}
