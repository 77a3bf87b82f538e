//! The 3D positionable: a model with a pivot, translation and rotation

use crate::render::{Model3D, RenderBackend3D};
use crate::scene::{Positionable, SpriteError};
use crate::scene3d::{Transform3D, Vector3};
use std::sync::Arc;

/// A drawable 3D element: a model coupled with a handle (pivot), world
/// translation and Euler rotation.
///
/// Positioning follows the same rules as the 2D [`crate::scene2d::Sprite`]:
/// the handle is the local-space point the translation places in world
/// space, rotation happens about the handle, and the cached local
/// transform is recomputed on every setter. The rotation is a vector of
/// Euler angles in radians, applied in X, Y, Z order.
#[derive(Clone)]
pub struct Sprite3D {
    handle: Vector3,
    position: Vector3,
    rotation: Vector3,
    transform: Transform3D,
    model: Arc<dyn Model3D>,
}

impl Sprite3D {
    /// Create a sprite around `model`, with the handle and translation at
    /// the origin and no rotation.
    pub fn new(model: Arc<dyn Model3D>) -> Self {
        let mut sprite = Self {
            handle: Vector3::zero(),
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            transform: Transform3D::identity(),
            model,
        };
        sprite.recalc_transform();
        sprite
    }

    /// Set the handle (pivot point) in the model's local space
    pub fn set_handle(&mut self, relative_position: Vector3) {
        self.handle = relative_position;
        self.recalc_transform();
    }

    /// The current handle
    pub fn handle(&self) -> Vector3 {
        self.handle
    }

    /// Position the handle point in world space
    pub fn set_translation(&mut self, translation: Vector3) {
        self.position = translation;
        self.recalc_transform();
    }

    /// The current translation
    pub fn translation(&self) -> Vector3 {
        self.position
    }

    /// Set the rotation about the handle as Euler angles in radians,
    /// applied in X, Y, Z order.
    pub fn set_rotation_in_radians(&mut self, euler_radians: Vector3) {
        self.rotation = euler_radians;
        self.recalc_transform();
    }

    /// The current rotation as Euler angles in radians
    pub fn rotation_in_radians(&self) -> Vector3 {
        self.rotation
    }

    /// The local transform derived from handle, translation and rotation
    pub fn transform(&self) -> Transform3D {
        self.transform
    }

    /// Directly assigning a transform is unsupported: the transform is
    /// derived state, and handle/translation/rotation remain the source of
    /// truth.
    ///
    /// # Errors
    /// Always returns [`SpriteError::TransformNotSettable`].
    pub fn set_transform(&mut self, _transform: Transform3D) -> Result<(), SpriteError> {
        Err(SpriteError::TransformNotSettable)
    }

    /// Extents of the model: a vector of its width, height and depth in
    /// model units.
    pub fn size(&self) -> Vector3 {
        let [width, height, depth] = self.model.extents();
        Vector3::new(width, height, depth)
    }

    /// The shared model resource
    pub fn model(&self) -> &Arc<dyn Model3D> {
        &self.model
    }

    /// Draw using the sprite's own transform as the only transform
    pub fn draw(&self, backend: &mut dyn RenderBackend3D) {
        self.draw_with(backend, &self.transform);
    }

    /// Draw with `world` overriding the local transform
    pub fn draw_with(&self, backend: &mut dyn RenderBackend3D, world: &Transform3D) {
        backend.draw_model(self.model.as_ref(), world.to_column_major());
    }

    /// Rebuild the cached transform after a setter touched handle,
    /// position or rotation. Ops are issued innermost-first, so the
    /// accumulated matrix is `T(position) * R(rotation) * T(-handle)`:
    /// the handle point maps to `position` under any rotation.
    fn recalc_transform(&mut self) {
        let mut transform = Transform3D::identity();
        transform.translate(self.handle * -1.0);
        transform.rotate(self.rotation);
        transform.translate(self.position);
        self.transform = transform;
    }
}

impl Positionable for Sprite3D {
    type Transform = Transform3D;
    type Backend = dyn RenderBackend3D;

    fn local_transform(&self) -> Transform3D {
        self.transform
    }

    fn draw_with(&self, backend: &mut (dyn RenderBackend3D + 'static), world: &Transform3D) {
        Self::draw_with(self, backend, world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::any::Any;
    use std::f32::consts::PI;

    struct TestModel {
        extents: [f32; 3],
    }

    impl Model3D for TestModel {
        fn extents(&self) -> [f32; 3] {
            self.extents
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn unit_sprite() -> Sprite3D {
        Sprite3D::new(Arc::new(TestModel {
            extents: [2.0, 4.0, 6.0],
        }))
    }

    fn assert_vec_eq(actual: Vector3, expected: Vector3) {
        assert_relative_eq!(actual.x(), expected.x(), epsilon = 1e-4);
        assert_relative_eq!(actual.y(), expected.y(), epsilon = 1e-4);
        assert_relative_eq!(actual.z(), expected.z(), epsilon = 1e-4);
    }

    #[test]
    fn test_size_reports_model_extents() {
        let sprite = unit_sprite();
        assert_eq!(sprite.size(), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_handle_point_maps_to_translation_under_rotation() {
        let mut sprite = unit_sprite();
        sprite.set_handle(Vector3::new(1.0, 2.0, 3.0));
        sprite.set_translation(Vector3::new(10.0, 20.0, 30.0));
        sprite.set_rotation_in_radians(Vector3::new(0.7, -1.2, 0.4));

        let mapped = sprite.transform().transform_vec(sprite.handle());
        assert_vec_eq(mapped, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_half_turn_about_z_mirrors_in_the_xy_plane() {
        let mut sprite = unit_sprite();
        sprite.set_handle(Vector3::new(1.0, 1.0, 0.0));
        sprite.set_translation(Vector3::new(5.0, 5.0, 0.0));
        sprite.set_rotation_in_radians(Vector3::new(0.0, 0.0, PI));

        // A point one unit right of the handle swings one unit left of the
        // translation; z is untouched.
        assert_vec_eq(
            sprite.transform().transform_vec(Vector3::new(2.0, 1.0, 0.0)),
            Vector3::new(4.0, 5.0, 0.0),
        );
    }

    #[test]
    fn test_set_transform_is_unsupported() {
        let mut sprite = unit_sprite();
        let result = sprite.set_transform(Transform3D::identity());
        assert_eq!(result, Err(SpriteError::TransformNotSettable));
    }

    #[test]
    fn test_draw_submits_the_cached_transform() {
        use crate::render::HeadlessBackend3D;

        let mut backend = HeadlessBackend3D::create("draw", 640, 480).unwrap();
        let mut sprite = unit_sprite();
        sprite.set_handle(Vector3::new(1.0, 2.0, 3.0));
        sprite.set_translation(Vector3::new(10.0, -4.0, 7.0));
        sprite.set_rotation_in_radians(Vector3::new(0.2, 0.5, -0.1));

        backend.begin_frame();
        sprite.draw(&mut backend);
        backend.end_frame();

        let draws = backend.draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].matrix, sprite.transform().to_column_major());
        assert_eq!(draws[0].extents, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_clone_copies_state_and_shares_model() {
        let mut original = unit_sprite();
        original.set_translation(Vector3::new(1.0, 2.0, 3.0));

        let copy = original.clone();
        assert!(Arc::ptr_eq(original.model(), copy.model()));

        original.set_translation(Vector3::zero());
        assert_eq!(copy.translation(), Vector3::new(1.0, 2.0, 3.0));
    }
}
