//! 3D frame orchestration

use crate::config::WindowConfig;
use crate::render::{KeyCallback, RenderBackend3D, RenderResult};
use crate::scene3d::{SharedNode3D, Sprite3D, Transform3D};
use log::{debug, trace};

/// Owns a 3D rendering backend and orchestrates frame rendering.
///
/// The 3D counterpart to [`crate::scene2d::Scenegraph2D`]: same frame
/// bracket, same synchronous pre-order traversal, model resources instead
/// of images.
pub struct Scenegraph3D<B: RenderBackend3D + 'static> {
    backend: B,
}

impl<B: RenderBackend3D + 'static> Scenegraph3D<B> {
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

    /// Load the model at `path` and wrap it in a sprite.
    ///
    /// # Errors
    /// Propagates [`crate::render::RenderError::ResourceLoad`] when the
    /// path does not decode.
    pub fn load_sprite(&mut self, path: &str) -> RenderResult<Sprite3D> {
        let model = self.backend.load_model(path)?;
        debug!("loaded 3D sprite from '{path}'");
        Ok(Sprite3D::new(model))
    }

    /// Build a textured sphere procedurally and wrap it in a sprite.
    ///
    /// The sphere approximates radius `radius` with `rings` horizontal
    /// divisions and `sectors` vertical slices, textured from the image at
    /// `texture_path`.
    ///
    /// # Errors
    /// Propagates [`crate::render::RenderError::ResourceLoad`] when the
    /// texture cannot be loaded or the parameters are degenerate.
    pub fn make_textured_sphere(
        &mut self,
        radius: f32,
        rings: u32,
        sectors: u32,
        texture_path: &str,
    ) -> RenderResult<Sprite3D> {
        let model = self
            .backend
            .make_textured_sphere(radius, rings, sectors, texture_path)?;
        debug!("built sphere sprite textured with '{texture_path}'");
        Ok(Sprite3D::new(model))
    }

    /// Register the function to call for key events in the scenegraph's
    /// window, or clear it with `None`.
    pub fn set_key_callback(&mut self, callback: Option<KeyCallback>) {
        self.backend.set_key_callback(callback);
    }

    /// Render one frame of the tree rooted at `root`.
    ///
    /// Brackets the recursive draw in `begin_frame`/`end_frame`; the root
    /// starts from the identity transform.
    pub fn render_frame(&mut self, root: &SharedNode3D) {
        trace!("3D frame begin");
        self.backend.begin_frame();
        root.borrow().draw(&mut self.backend, Transform3D::identity());
        self.backend.end_frame();
        trace!("3D frame end");
    }

    /// The owned backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the owned backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
