//! Backend abstraction traits for the rendering collaborator
//!
//! These traits define the narrow interface the scene core needs from a
//! rendering backend. The core never depends on a particular backend's
//! types; drawable resources are opaque trait objects shared through
//! [`std::sync::Arc`].

use crate::foundation::math::Rect;
use crate::render::RenderResult;
use std::any::Any;
use std::sync::Arc;

/// Synchronous key-input callback.
///
/// Registered on a backend through [`RenderBackend2D::set_key_callback`] or
/// [`RenderBackend3D::set_key_callback`] and invoked by the backend's own
/// event polling during the frame bracket. Context travels inside the
/// closure capture; there is no untyped user-data pointer.
pub type KeyCallback = Box<dyn FnMut(i32)>;

/// Opaque handle to a decoded 2D image owned by the backend
pub trait Image2D {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in pixels
    fn height(&self) -> u32;

    /// Downcast to the concrete backend image type.
    ///
    /// This breaks the abstraction but backends need it to get their own
    /// texture data back out of a shared handle.
    fn as_any(&self) -> &dyn Any;
}

/// Opaque handle to decoded 3D geometry owned by the backend
pub trait Model3D {
    /// Model extents (width, height, depth) in model units
    fn extents(&self) -> [f32; 3];

    /// Downcast to the concrete backend model type
    fn as_any(&self) -> &dyn Any;
}

/// 2D rendering backend contract.
///
/// `begin_frame` and `end_frame` bracket one frame and must be paired;
/// no draw may occur outside the bracket. `end_frame` completes the frame
/// and polls/dispatches input events, delivering them synchronously to the
/// registered key callback.
pub trait RenderBackend2D {
    /// Create a backend instance sized to the given window.
    ///
    /// # Errors
    /// Returns [`crate::render::RenderError::Init`] when the window or
    /// context cannot be created.
    fn create(window_name: &str, width: u32, height: u32) -> RenderResult<Self>
    where
        Self: Sized;

    /// Decode the image at `path` and upload it as a drawable resource.
    ///
    /// # Errors
    /// Returns [`crate::render::RenderError::ResourceLoad`] when the path
    /// does not resolve to a decodable image.
    fn load_image(&mut self, path: &str) -> RenderResult<Arc<dyn Image2D>>;

    /// Start drawing a new frame
    fn begin_frame(&mut self);

    /// Draw `source` pixels of `image`, positioned by `matrix`.
    ///
    /// The matrix is a column-major 3x3 homogeneous transform; the layout
    /// is a hard contract shared with
    /// [`crate::scene2d::Transform2D::to_column_major`].
    fn draw_image(&mut self, image: &dyn Image2D, source: Rect, matrix: [f32; 9]);

    /// Complete the frame, present it, and poll/dispatch pending events
    fn end_frame(&mut self);

    /// Register the key callback, or clear it with `None` (a valid no-op)
    fn set_key_callback(&mut self, callback: Option<KeyCallback>);

    /// Deliver one key event to the registered callback.
    ///
    /// Backends call this from their own event polling; hosts may call it
    /// directly to simulate input.
    fn dispatch_key(&mut self, key: i32);
}

/// 3D rendering backend contract.
///
/// Frame bracketing and input dispatch follow the same rules as
/// [`RenderBackend2D`].
pub trait RenderBackend3D {
    /// Create a backend instance sized to the given window.
    ///
    /// # Errors
    /// Returns [`crate::render::RenderError::Init`] when the window or
    /// context cannot be created.
    fn create(window_name: &str, width: u32, height: u32) -> RenderResult<Self>
    where
        Self: Sized;

    /// Decode the model at `path` and upload it as a drawable resource.
    ///
    /// # Errors
    /// Returns [`crate::render::RenderError::ResourceLoad`] when the path
    /// does not resolve to a decodable model.
    fn load_model(&mut self, path: &str) -> RenderResult<Arc<dyn Model3D>>;

    /// Build a textured sphere model procedurally.
    ///
    /// The sphere is a polygonal approximation with `rings` horizontal
    /// divisions and `sectors` vertical slices, textured from the image at
    /// `texture_path`.
    ///
    /// # Errors
    /// Returns [`crate::render::RenderError::ResourceLoad`] when the
    /// texture cannot be loaded.
    fn make_textured_sphere(
        &mut self,
        radius: f32,
        rings: u32,
        sectors: u32,
        texture_path: &str,
    ) -> RenderResult<Arc<dyn Model3D>>;

    /// Start drawing a new frame
    fn begin_frame(&mut self);

    /// Draw `model`, transforming its vertices by `matrix`.
    ///
    /// The matrix is a column-major 4x4 homogeneous transform matching
    /// [`crate::scene3d::Transform3D::to_column_major`].
    fn draw_model(&mut self, model: &dyn Model3D, matrix: [f32; 16]);

    /// Complete the frame, present it, and poll/dispatch pending events
    fn end_frame(&mut self);

    /// Register the key callback, or clear it with `None` (a valid no-op)
    fn set_key_callback(&mut self, callback: Option<KeyCallback>);

    /// Deliver one key event to the registered callback
    fn dispatch_key(&mut self, key: i32);
}
