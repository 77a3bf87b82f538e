//! Immutable 2D affine transform value type

use crate::foundation::math::{Mat3, Point2};
use crate::scene2d::Vector2;
use std::ops::Mul;

/// An affine transform over 2D space, stored as a 3x3 homogeneous matrix.
///
/// A plain `Copy` value: assigning a transform copies it, and the mutating
/// calls ([`Self::translate`], [`Self::rotate`]) redefine the receiver
/// without affecting any other copy.
///
/// Composition is non-commutative. Each mutating call composes its matrix
/// on the left (`matrix = op * matrix`), so the newest operation takes
/// effect nearest the identity: after `translate(v)` then `rotate(r)` the
/// accumulated matrix is `R * T`, which when applied to a point translates
/// first and then rotates the result about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// The identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Mat3::identity(),
        }
    }

    /// Add a translation by `offset` to the transform.
    ///
    /// Used to "move" an object that will be drawn with this transform.
    pub fn translate(&mut self, offset: Vector2) {
        self.matrix = Mat3::new_translation(&offset.to_na()) * self.matrix;
    }

    /// Add a rotation of `radians` about the Z axis to the transform.
    ///
    /// The rotation composes with everything already accumulated, so it
    /// takes any previous translations and rotations into account.
    pub fn rotate(&mut self, radians: f32) {
        self.matrix = Mat3::new_rotation(radians) * self.matrix;
    }

    /// Apply the transform to a point, returning the result as a new
    /// vector.
    pub fn transform_vec(&self, source: Vector2) -> Vector2 {
        let point = self
            .matrix
            .transform_point(&Point2::new(source.x(), source.y()));
        Vector2::new(point.x, point.y)
    }

    /// Apply the transform to a point, replacing the caller's value
    pub fn transform_vec_in_place(&self, source: &mut Vector2) {
        *source = self.transform_vec(*source);
    }

    /// Apply the transform to `len` vectors starting at `start`, returning
    /// the results as a new vector sequence in the same order.
    ///
    /// # Panics
    /// Panics if `[start, start + len)` lies outside `source`.
    pub fn transform_vecs(&self, source: &[Vector2], start: usize, len: usize) -> Vec<Vector2> {
        source[start..start + len]
            .iter()
            .map(|vec| self.transform_vec(*vec))
            .collect()
    }

    /// Apply the transform to `len` vectors starting at `start`, replacing
    /// the values in place.
    ///
    /// # Panics
    /// Panics if `[start, start + len)` lies outside `source`.
    pub fn transform_vecs_in_place(&self, source: &mut [Vector2], start: usize, len: usize) {
        for vec in &mut source[start..start + len] {
            *vec = self.transform_vec(*vec);
        }
    }

    /// Flatten to a column-major 3x3 array.
    ///
    /// The layout is the byte contract shared with
    /// [`crate::render::RenderBackend2D::draw_image`]: columns are stored
    /// contiguously, so the translation occupies indices 6 and 7.
    pub fn to_column_major(&self) -> [f32; 9] {
        let mut data = [0.0f32; 9];
        data.copy_from_slice(self.matrix.as_slice());
        data
    }
}

impl Mul for Transform2D {
    type Output = Self;

    /// Concatenate two transforms: `a * b` applies `b` first, then `a`
    /// (standard matrix composition). A scene tree computes
    /// `world = parent_world * local`.
    fn mul(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}
