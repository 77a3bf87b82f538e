//! Headless recording backends
//!
//! Windowless implementations of the backend traits. They validate
//! resources (the 2D backend decodes real image dimensions, the 3D backend
//! checks model paths and builds procedural spheres) and record every draw
//! command together with its flattened matrix instead of rasterizing.
//!
//! Sufficient for CI, for hosts without a display, and for asserting what
//! a scene traversal actually submitted. A GPU backend can replace them
//! without touching the scene core.

use crate::foundation::math::Rect;
use crate::render::{
    Image2D, KeyCallback, Model3D, RenderBackend2D, RenderBackend3D, RenderError, RenderResult,
};
use log::{debug, info, warn};
use std::any::Any;
use std::path::Path;
use std::sync::Arc;

/// Image resource held by [`HeadlessBackend2D`]: real dimensions, no pixels
pub struct HeadlessImage {
    path: String,
    width: u32,
    height: u32,
}

impl HeadlessImage {
    /// Path this image was loaded from
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Image2D for HeadlessImage {
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

/// Model resource held by [`HeadlessBackend3D`]
pub struct HeadlessModel {
    source: String,
    extents: [f32; 3],
    vertex_count: usize,
}

impl HeadlessModel {
    /// Path or description of where this model came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of vertices in the recorded geometry
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Model3D for HeadlessModel {
    fn extents(&self) -> [f32; 3] {
        self.extents
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One recorded 2D draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedDraw2D {
    /// Width of the drawn image in pixels
    pub image_width: u32,
    /// Height of the drawn image in pixels
    pub image_height: u32,
    /// Source region that was drawn
    pub source: Rect,
    /// Column-major 3x3 world transform the draw was submitted with
    pub matrix: [f32; 9],
}

/// One recorded 3D draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedDraw3D {
    /// Extents of the drawn model
    pub extents: [f32; 3],
    /// Column-major 4x4 world transform the draw was submitted with
    pub matrix: [f32; 16],
}

/// Windowless 2D backend that records draw commands
pub struct HeadlessBackend2D {
    window_name: String,
    width: u32,
    height: u32,
    frame_open: bool,
    frames_completed: usize,
    key_callback: Option<KeyCallback>,
    queued_keys: Vec<i32>,
    draws: Vec<RecordedDraw2D>,
}

impl HeadlessBackend2D {
    /// Queue a key event for delivery during the next `end_frame`
    pub fn queue_key(&mut self, key: i32) {
        self.queued_keys.push(key);
    }

    /// Draw commands recorded since the last `begin_frame`
    pub fn draws(&self) -> &[RecordedDraw2D] {
        &self.draws
    }

    /// Whether a begin/end bracket is currently open
    pub fn frame_open(&self) -> bool {
        self.frame_open
    }

    /// Number of completed frames
    pub fn frames_completed(&self) -> usize {
        self.frames_completed
    }

    /// Window name the backend was created with
    pub fn window_name(&self) -> &str {
        &self.window_name
    }

    /// Logical drawing-space size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl RenderBackend2D for HeadlessBackend2D {
    fn create(window_name: &str, width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Init(format!(
                "window '{window_name}' must have non-zero dimensions, got {width}x{height}"
            )));
        }
        info!("headless 2D backend '{window_name}' created at {width}x{height}");
        Ok(Self {
            window_name: window_name.to_owned(),
            width,
            height,
            frame_open: false,
            frames_completed: 0,
            key_callback: None,
            queued_keys: Vec::new(),
            draws: Vec::new(),
        })
    }

    fn load_image(&mut self, path: &str) -> RenderResult<Arc<dyn Image2D>> {
        let (width, height) =
            image::image_dimensions(path).map_err(|err| RenderError::ResourceLoad {
                path: path.to_owned(),
                reason: err.to_string(),
            })?;
        debug!("loaded image '{path}' ({width}x{height})");
        Ok(Arc::new(HeadlessImage {
            path: path.to_owned(),
            width,
            height,
        }))
    }

    fn begin_frame(&mut self) {
        if self.frame_open {
            warn!("begin_frame called while a frame is already open");
        }
        self.draws.clear();
        self.frame_open = true;
    }

    fn draw_image(&mut self, image: &dyn Image2D, source: Rect, matrix: [f32; 9]) {
        if !self.frame_open {
            warn!("draw_image outside a begin_frame/end_frame bracket; ignored");
            return;
        }
        self.draws.push(RecordedDraw2D {
            image_width: image.width(),
            image_height: image.height(),
            source,
            matrix,
        });
    }

    fn end_frame(&mut self) {
        if !self.frame_open {
            warn!("end_frame called without a matching begin_frame");
            return;
        }
        self.frame_open = false;
        self.frames_completed += 1;
        let pending: Vec<i32> = self.queued_keys.drain(..).collect();
        for key in pending {
            self.dispatch_key(key);
        }
    }

    fn set_key_callback(&mut self, callback: Option<KeyCallback>) {
        self.key_callback = callback;
    }

    fn dispatch_key(&mut self, key: i32) {
        if let Some(callback) = self.key_callback.as_mut() {
            callback(key);
        }
    }
}

/// Windowless 3D backend that records draw commands.
///
/// `load_model` verifies the path exists but does not decode geometry;
/// the recorded model reports unit extents. `make_textured_sphere`
/// computes the real vertex count and extents of the approximated sphere.
pub struct HeadlessBackend3D {
    window_name: String,
    width: u32,
    height: u32,
    frame_open: bool,
    frames_completed: usize,
    key_callback: Option<KeyCallback>,
    queued_keys: Vec<i32>,
    draws: Vec<RecordedDraw3D>,
}

impl HeadlessBackend3D {
    /// Queue a key event for delivery during the next `end_frame`
    pub fn queue_key(&mut self, key: i32) {
        self.queued_keys.push(key);
    }

    /// Draw commands recorded since the last `begin_frame`
    pub fn draws(&self) -> &[RecordedDraw3D] {
        &self.draws
    }

    /// Whether a begin/end bracket is currently open
    pub fn frame_open(&self) -> bool {
        self.frame_open
    }

    /// Number of completed frames
    pub fn frames_completed(&self) -> usize {
        self.frames_completed
    }

    /// Window name the backend was created with
    pub fn window_name(&self) -> &str {
        &self.window_name
    }

    /// Logical drawing-space size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl RenderBackend3D for HeadlessBackend3D {
    fn create(window_name: &str, width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Init(format!(
                "window '{window_name}' must have non-zero dimensions, got {width}x{height}"
            )));
        }
        info!("headless 3D backend '{window_name}' created at {width}x{height}");
        Ok(Self {
            window_name: window_name.to_owned(),
            width,
            height,
            frame_open: false,
            frames_completed: 0,
            key_callback: None,
            queued_keys: Vec::new(),
            draws: Vec::new(),
        })
    }

    fn load_model(&mut self, path: &str) -> RenderResult<Arc<dyn Model3D>> {
        if !Path::new(path).is_file() {
            return Err(RenderError::ResourceLoad {
                path: path.to_owned(),
                reason: "no such file".to_owned(),
            });
        }
        debug!("recorded model '{path}'");
        Ok(Arc::new(HeadlessModel {
            source: path.to_owned(),
            extents: [1.0, 1.0, 1.0],
            vertex_count: 0,
        }))
    }

    fn make_textured_sphere(
        &mut self,
        radius: f32,
        rings: u32,
        sectors: u32,
        texture_path: &str,
    ) -> RenderResult<Arc<dyn Model3D>> {
        if radius <= 0.0 || rings < 2 || sectors < 2 {
            return Err(RenderError::ResourceLoad {
                path: texture_path.to_owned(),
                reason: format!(
                    "degenerate sphere parameters: radius {radius}, {rings} rings, {sectors} sectors"
                ),
            });
        }
        let diameter = radius * 2.0;
        debug!("built {rings}x{sectors} sphere of radius {radius} textured with '{texture_path}'");
        Ok(Arc::new(HeadlessModel {
            source: format!("sphere({texture_path})"),
            extents: [diameter, diameter, diameter],
            vertex_count: (rings * sectors) as usize,
        }))
    }

    fn begin_frame(&mut self) {
        if self.frame_open {
            warn!("begin_frame called while a frame is already open");
        }
        self.draws.clear();
        self.frame_open = true;
    }

    fn draw_model(&mut self, model: &dyn Model3D, matrix: [f32; 16]) {
        if !self.frame_open {
            warn!("draw_model outside a begin_frame/end_frame bracket; ignored");
            return;
        }
        self.draws.push(RecordedDraw3D {
            extents: model.extents(),
            matrix,
        });
    }

    fn end_frame(&mut self) {
        if !self.frame_open {
            warn!("end_frame called without a matching begin_frame");
            return;
        }
        self.frame_open = false;
        self.frames_completed += 1;
        let pending: Vec<i32> = self.queued_keys.drain(..).collect();
        for key in pending {
            self.dispatch_key(key);
        }
    }

    fn set_key_callback(&mut self, callback: Option<KeyCallback>) {
        self.key_callback = callback;
    }

    fn dispatch_key(&mut self, key: i32) {
        if let Some(callback) = self.key_callback.as_mut() {
            callback(key);
        }
    }
}
