//! Immutable 3D vector value type

use crate::foundation::math::{MathError, Vec3};
use std::ops::{Div, Mul};

/// An immutable 3D point or offset.
///
/// Every operation returns a new value; two vectors with equal components
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    inner: Vec3,
}

impl Vector3 {
    /// Create a vector from explicit components
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            inner: Vec3::new(x, y, z),
        }
    }

    /// The zero vector (0, 0, 0)
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

    /// Z component
    pub fn z(&self) -> f32 {
        self.inner.z
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

    pub(crate) fn to_na(self) -> Vec3 {
        self.inner
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            inner: self.inner * scalar,
        }
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    /// Scalar division. Division by zero is the caller's responsibility;
    /// debug builds assert on it.
    fn div(self, divisor: f32) -> Self {
        debug_assert!(divisor != 0.0, "Vector3 scalar division by zero");
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
        let v = Vector3::default();
        assert_eq!(v, Vector3::zero());
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z(), 0.0);
    }

    #[test]
    fn test_scalar_multiply_and_divide() {
        let v = Vector3::new(2.0, -4.0, 6.0);
        assert_eq!(v * 0.5, Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(v / 2.0, Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(v, Vector3::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn test_checked_div_reports_zero_divisor() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.checked_div(0.0), Err(MathError::DivideByZero));
        assert_eq!(v.checked_div(2.0), Ok(Vector3::new(0.5, 1.0, 1.5)));
    }
}
