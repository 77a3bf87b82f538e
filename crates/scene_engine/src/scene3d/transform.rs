//! Immutable 3D affine transform value type

use crate::foundation::math::{Mat4, Point3, Rotation3};
use crate::scene3d::Vector3;
use std::ops::Mul;

/// An affine transform over 3D space, stored as a 4x4 homogeneous matrix.
///
/// Composition follows the same rule as [`crate::scene2d::Transform2D`]:
/// each mutating call composes its matrix on the left
/// (`matrix = op * matrix`), so the newest operation acts on the result of
/// everything accumulated before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    matrix: Mat4,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// The identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Add a translation by `offset` to the transform
    pub fn translate(&mut self, offset: Vector3) {
        self.matrix = Mat4::new_translation(&offset.to_na()) * self.matrix;
    }

    /// Add a rotation given as Euler angles in radians, applied in
    /// X, Y, Z order.
    pub fn rotate(&mut self, euler_radians: Vector3) {
        let rotation = Rotation3::from_euler_angles(
            euler_radians.x(),
            euler_radians.y(),
            euler_radians.z(),
        );
        self.matrix = rotation.to_homogeneous() * self.matrix;
    }

    /// Apply the transform to a point, returning the result as a new
    /// vector. All three components come from the transformed point; the
    /// homogeneous coordinate never leaks into the result.
    pub fn transform_vec(&self, source: Vector3) -> Vector3 {
        let point = self
            .matrix
            .transform_point(&Point3::new(source.x(), source.y(), source.z()));
        Vector3::new(point.x, point.y, point.z)
    }

    /// Apply the transform to a point, replacing the caller's value
    pub fn transform_vec_in_place(&self, source: &mut Vector3) {
        *source = self.transform_vec(*source);
    }

    /// Apply the transform to `len` vectors starting at `start`, returning
    /// the results as a new vector sequence in the same order.
    ///
    /// # Panics
    /// Panics if `[start, start + len)` lies outside `source`.
    pub fn transform_vecs(&self, source: &[Vector3], start: usize, len: usize) -> Vec<Vector3> {
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
    pub fn transform_vecs_in_place(&self, source: &mut [Vector3], start: usize, len: usize) {
        for vec in &mut source[start..start + len] {
            *vec = self.transform_vec(*vec);
        }
    }

    /// Flatten to a column-major 4x4 array.
    ///
    /// The layout is the byte contract shared with
    /// [`crate::render::RenderBackend3D::draw_model`]: columns are stored
    /// contiguously, so the translation occupies indices 12, 13 and 14.
    pub fn to_column_major(&self) -> [f32; 16] {
        let mut data = [0.0f32; 16];
        data.copy_from_slice(self.matrix.as_slice());
        data
    }
}

impl Mul for Transform3D {
    type Output = Self;

    /// Concatenate two transforms: `a * b` applies `b` first, then `a`.
    /// A scene tree computes `world = parent_world * local`.
    fn mul(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(actual: Vector3, expected: Vector3) {
        assert_relative_eq!(actual.x(), expected.x(), epsilon = 1e-5);
        assert_relative_eq!(actual.y(), expected.y(), epsilon = 1e-5);
        assert_relative_eq!(actual.z(), expected.z(), epsilon = 1e-5);
    }

    #[test]
    fn test_identity_maps_points_to_themselves() {
        let identity = Transform3D::identity();
        let vec = Vector3::new(1.0, -2.0, 3.0);
        assert_vec_eq(identity.transform_vec(vec), vec);
    }

    #[test]
    fn test_sequential_translations_accumulate() {
        let mut transform = Transform3D::identity();
        transform.translate(Vector3::new(1.0, 2.0, 3.0));
        transform.translate(Vector3::new(-1.0, 0.0, 4.0));
        assert_vec_eq(
            transform.transform_vec(Vector3::zero()),
            Vector3::new(0.0, 2.0, 7.0),
        );
    }

    #[test]
    fn test_euler_rotation_about_x_swings_y_into_z() {
        let mut transform = Transform3D::identity();
        transform.rotate(Vector3::new(FRAC_PI_2, 0.0, 0.0));
        assert_vec_eq(
            transform.transform_vec(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_combined_euler_matches_axis_by_axis_application() {
        // One rotate call with all three angles must equal rotating about
        // X, then Y, then Z in separate calls.
        let angles = Vector3::new(0.3, -0.8, 1.2);

        let mut combined = Transform3D::identity();
        combined.rotate(angles);

        let mut sequential = Transform3D::identity();
        sequential.rotate(Vector3::new(angles.x(), 0.0, 0.0));
        sequential.rotate(Vector3::new(0.0, angles.y(), 0.0));
        sequential.rotate(Vector3::new(0.0, 0.0, angles.z()));

        let vec = Vector3::new(2.0, -1.0, 0.5);
        assert_vec_eq(
            combined.transform_vec(vec),
            sequential.transform_vec(vec),
        );
    }

    #[test]
    fn test_transformed_point_keeps_true_z_component() {
        // Rotate a Y-axis point onto the Z axis, then push it out along Z.
        // The reported z must be the actual transformed coordinate.
        let mut transform = Transform3D::identity();
        transform.rotate(Vector3::new(FRAC_PI_2, 0.0, 0.0));
        transform.translate(Vector3::new(0.0, 0.0, 5.0));
        assert_vec_eq(
            transform.transform_vec(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(0.0, 0.0, 6.0),
        );
    }

    #[test]
    fn test_concatenation_applies_right_operand_first() {
        let mut a = Transform3D::identity();
        a.rotate(Vector3::new(0.2, 0.0, 0.9));
        a.translate(Vector3::new(5.0, -2.0, 1.0));

        let mut b = Transform3D::identity();
        b.translate(Vector3::new(-1.0, 4.0, 2.0));
        b.rotate(Vector3::new(0.0, 1.1, 0.0));

        let vec = Vector3::new(2.5, 7.0, -3.0);
        let composed = (a * b).transform_vec(vec);
        let sequential = a.transform_vec(b.transform_vec(vec));
        assert_vec_eq(composed, sequential);
    }

    #[test]
    fn test_batch_transforms_match_single_vector_form() {
        let mut transform = Transform3D::identity();
        transform.rotate(Vector3::new(0.4, 0.2, -0.6));
        transform.translate(Vector3::new(-7.0, 2.0, 3.0));

        let source = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-2.0, 5.0, 0.5),
        ];

        let batch = transform.transform_vecs(&source, 0, 3);
        let mut in_place = source;
        transform.transform_vecs_in_place(&mut in_place, 0, 3);
        for i in 0..3 {
            assert_vec_eq(batch[i], transform.transform_vec(source[i]));
            assert_vec_eq(in_place[i], batch[i]);
        }
    }

    #[test]
    fn test_column_major_layout_puts_translation_last() {
        let mut transform = Transform3D::identity();
        transform.translate(Vector3::new(3.0, 4.0, 5.0));

        let data = transform.to_column_major();
        assert_relative_eq!(data[12], 3.0);
        assert_relative_eq!(data[13], 4.0);
        assert_relative_eq!(data[14], 5.0);
        assert_relative_eq!(data[15], 1.0);
        assert_relative_eq!(data[0], 1.0);
        assert_relative_eq!(data[5], 1.0);
        assert_relative_eq!(data[10], 1.0);
    }
}
