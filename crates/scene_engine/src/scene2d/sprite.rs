//! The 2D positionable: an image with a pivot, translation and rotation

use crate::foundation::math::Rect;
use crate::render::{Image2D, RenderBackend2D};
use crate::scene::{Positionable, SpriteError};
use crate::scene2d::{Transform2D, Vector2};
use std::sync::Arc;

/// A drawable 2D element: an image region coupled with a handle (pivot),
/// world translation and rotation.
///
/// The handle is the local-space origin for both rotation and
/// translation, measured from the bottom-left corner of the image; the
/// translation places the handle point in world space. The local
/// transform is cached and recomputed on every setter, so it is never
/// stale:
///
/// ```text
/// local = Translate(position) ∘ Rotate(rotation) ∘ Translate(-handle)
/// ```
///
/// Cloning copies all positioning state and shares the underlying image
/// resource; the image is read-only from the sprite's perspective.
#[derive(Clone)]
pub struct Sprite {
    handle: Vector2,
    position: Vector2,
    rotation: f32,
    transform: Transform2D,
    source_rect: Rect,
    image: Arc<dyn Image2D>,
}

impl Sprite {
    /// Create a sprite drawing `source_rect` pixels out of `image`, with
    /// the handle and translation at the origin and no rotation.
    pub fn new(image: Arc<dyn Image2D>, source_rect: Rect) -> Self {
        let mut sprite = Self {
            handle: Vector2::zero(),
            position: Vector2::zero(),
            rotation: 0.0,
            transform: Transform2D::identity(),
            source_rect,
            image,
        };
        sprite.recalc_transform();
        sprite
    }

    /// Set the handle (pivot point), relative to the bottom-left corner of
    /// the image.
    pub fn set_handle(&mut self, relative_position: Vector2) {
        self.handle = relative_position;
        self.recalc_transform();
    }

    /// The current handle
    pub fn handle(&self) -> Vector2 {
        self.handle
    }

    /// Position the handle point in world space
    pub fn set_translation(&mut self, translation: Vector2) {
        self.position = translation;
        self.recalc_transform();
    }

    /// The current translation
    pub fn translation(&self) -> Vector2 {
        self.position
    }

    /// Set the rotation about the handle, in radians
    pub fn set_rotation_in_radians(&mut self, radians: f32) {
        self.rotation = radians;
        self.recalc_transform();
    }

    /// The current rotation about the handle, in radians
    pub fn rotation_in_radians(&self) -> f32 {
        self.rotation
    }

    /// The local transform derived from handle, translation and rotation
    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Directly assigning a transform is unsupported: the transform is
    /// derived state, and handle/translation/rotation remain the source of
    /// truth.
    ///
    /// # Errors
    /// Always returns [`SpriteError::TransformNotSettable`].
    pub fn set_transform(&mut self, _transform: Transform2D) -> Result<(), SpriteError> {
        Err(SpriteError::TransformNotSettable)
    }

    /// Size of the drawn region: a vector where x is the source-rect width
    /// and y its height.
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.source_rect.width, self.source_rect.height)
    }

    /// The source region drawn out of the image
    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    /// The shared image resource
    pub fn image(&self) -> &Arc<dyn Image2D> {
        &self.image
    }

    /// Draw using the sprite's own transform as the only transform
    pub fn draw(&self, backend: &mut dyn RenderBackend2D) {
        self.draw_with(backend, &self.transform);
    }

    /// Draw with `world` overriding the local transform.
    ///
    /// The scene tree uses this: it treats the sprite's transform as a
    /// local transform and passes down the concatenation with the parent's
    /// world transform.
    pub fn draw_with(&self, backend: &mut dyn RenderBackend2D, world: &Transform2D) {
        backend.draw_image(self.image.as_ref(), self.source_rect, world.to_column_major());
    }

    /// Rebuild the cached transform after a setter touched handle,
    /// position or rotation. Ops are issued innermost-first, so the
    /// accumulated matrix is `T(position) * R(rotation) * T(-handle)`:
    /// the handle point maps to `position` under any rotation.
    fn recalc_transform(&mut self) {
        let mut transform = Transform2D::identity();
        transform.translate(self.handle * -1.0);
        transform.rotate(self.rotation);
        transform.translate(self.position);
        self.transform = transform;
    }
}

impl Positionable for Sprite {
    type Transform = Transform2D;
    type Backend = dyn RenderBackend2D;

    fn local_transform(&self) -> Transform2D {
        self.transform
    }

    fn draw_with(&self, backend: &mut (dyn RenderBackend2D + 'static), world: &Transform2D) {
        Self::draw_with(self, backend, world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::any::Any;
    use std::f32::consts::PI;

    struct TestImage {
        width: u32,
        height: u32,
    }

    impl Image2D for TestImage {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn sprite_100x100() -> Sprite {
        let image = Arc::new(TestImage {
            width: 100,
            height: 100,
        });
        Sprite::new(image, Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    fn assert_vec_eq(actual: Vector2, expected: Vector2) {
        assert_relative_eq!(actual.x(), expected.x(), epsilon = 1e-4);
        assert_relative_eq!(actual.y(), expected.y(), epsilon = 1e-4);
    }

    #[test]
    fn test_size_comes_from_source_rect() {
        let image = Arc::new(TestImage {
            width: 256,
            height: 192,
        });
        let sprite = Sprite::new(image, Rect::new(10.0, 20.0, 64.0, 48.0));
        assert_eq!(sprite.size(), Vector2::new(64.0, 48.0));
    }

    #[test]
    fn test_handle_point_maps_to_translation_regardless_of_handle() {
        let mut sprite = sprite_100x100();
        sprite.set_translation(Vector2::new(100.0, 100.0));

        for handle in [Vector2::new(50.0, 50.0), Vector2::new(10.0, 80.0)] {
            sprite.set_handle(handle);
            let mapped = sprite.transform().transform_vec(handle);
            assert_vec_eq(mapped, Vector2::new(100.0, 100.0));
        }
    }

    #[test]
    fn test_half_turn_mirrors_points_through_translation() {
        let mut sprite = sprite_100x100();
        sprite.set_handle(Vector2::new(50.0, 50.0));
        sprite.set_translation(Vector2::new(100.0, 100.0));
        sprite.set_rotation_in_radians(PI);

        // A point offset from the handle and its opposite swap sides,
        // mirrored through the translation.
        let transform = sprite.transform();
        assert_vec_eq(
            transform.transform_vec(Vector2::new(60.0, 60.0)),
            Vector2::new(90.0, 90.0),
        );
        assert_vec_eq(
            transform.transform_vec(Vector2::new(40.0, 40.0)),
            Vector2::new(110.0, 110.0),
        );
    }

    #[test]
    fn test_transform_recomputed_on_every_setter() {
        let mut sprite = sprite_100x100();
        let before = sprite.transform();
        sprite.set_translation(Vector2::new(5.0, 5.0));
        assert_ne!(sprite.transform(), before);

        let translated = sprite.transform();
        sprite.set_rotation_in_radians(0.5);
        assert_ne!(sprite.transform(), translated);
    }

    #[test]
    fn test_set_transform_is_unsupported() {
        let mut sprite = sprite_100x100();
        let result = sprite.set_transform(Transform2D::identity());
        assert_eq!(result, Err(SpriteError::TransformNotSettable));
    }

    #[test]
    fn test_draw_submits_the_cached_transform() {
        use crate::render::HeadlessBackend2D;

        let mut backend = HeadlessBackend2D::create("draw", 800, 600).unwrap();
        let mut sprite = sprite_100x100();
        sprite.set_handle(Vector2::new(50.0, 50.0));
        sprite.set_translation(Vector2::new(120.0, 80.0));
        sprite.set_rotation_in_radians(0.3);

        backend.begin_frame();
        sprite.draw(&mut backend);
        backend.end_frame();

        let draws = backend.draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].matrix, sprite.transform().to_column_major());
        assert_eq!(draws[0].source, sprite.source_rect());
    }

    #[test]
    fn test_clone_copies_state_and_shares_image() {
        let mut original = sprite_100x100();
        original.set_translation(Vector2::new(7.0, 8.0));

        let copy = original.clone();
        assert!(Arc::ptr_eq(original.image(), copy.image()));

        // Mutating the original does not touch the copy.
        original.set_translation(Vector2::new(0.0, 0.0));
        assert_eq!(copy.translation(), Vector2::new(7.0, 8.0));
    }
}
