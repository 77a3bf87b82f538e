//! 2D frame orchestration
//!
//! [`Scenegraph2D`] owns one rendering backend and drives one frame at a
//! time: begin, recursive draw from the root, end. It is also the entry
//! point for loading sprites and registering key input.

use crate::config::WindowConfig;
use crate::foundation::math::Rect;
use crate::render::{KeyCallback, RenderBackend2D, RenderResult};
use crate::scene2d::{SharedNode2D, Sprite, Transform2D};
use log::{debug, trace};

/// Owns a 2D rendering backend and orchestrates frame rendering.
///
/// The whole traversal runs synchronously on the calling thread between
/// `begin_frame` and `end_frame`; no drawing occurs outside that bracket.
pub struct Scenegraph2D<B: RenderBackend2D + 'static> {
    backend: B,
}

impl<B: RenderBackend2D + 'static> Scenegraph2D<B> {
    /// Create a scenegraph with a backend sized to the given window.
    ///
    /// # Errors
    /// Propagates [`crate::render::RenderError::Init`] when the backend
    /// cannot create its window or context.
    pub fn new(name: &str, window_width: u32, window_height: u32) -> RenderResult<Self> {
        let backend = B::create(name, window_width, window_height)?;
        Ok(Self { backend })
    }

    /// Create a scenegraph from a parsed window configuration.
    ///
    /// # Errors
    /// Propagates [`crate::render::RenderError::Init`] from the backend.
    pub fn from_config(config: &WindowConfig) -> RenderResult<Self> {
        Self::new(&config.title, config.width, config.height)
    }

    /// Load the image at `path` and wrap it in a sprite drawing the full
    /// image.
    ///
    /// Sprites are plain values: clone them freely, the decoded image is
    /// shared.
    ///
    /// # Errors
    /// Propagates [`crate::render::RenderError::ResourceLoad`] when the
    /// path does not decode.
    pub fn load_sprite(&mut self, path: &str) -> RenderResult<Sprite> {
        let image = self.backend.load_image(path)?;
        let source = Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32);
        debug!("loaded sprite from '{path}'");
        Ok(Sprite::new(image, source))
    }

    /// Register the function to call for key events in the scenegraph's
    /// window, or clear it with `None`.
    pub fn set_key_callback(&mut self, callback: Option<KeyCallback>) {
        self.backend.set_key_callback(callback);
    }

    /// Render one frame of the tree rooted at `root`.
    ///
    /// Brackets the recursive draw in `begin_frame`/`end_frame`; the root
    /// starts from the identity transform, and every node concatenates its
    /// local transform onto its parent's accumulated world transform on
    /// the way down.
    pub fn render_frame(&mut self, root: &SharedNode2D) {
        trace!("2D frame begin");
        self.backend.begin_frame();
        root.borrow().draw(&mut self.backend, Transform2D::identity());
        self.backend.end_frame();
        trace!("2D frame end");
    }

    /// The owned backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the owned backend (key queues, recorded draws)
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
