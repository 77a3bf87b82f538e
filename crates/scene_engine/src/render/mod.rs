//! # Rendering collaborator contract
//!
//! The scene core does not rasterize anything itself. Window creation,
//! resource decoding and the actual draw calls live behind the
//! [`RenderBackend2D`] and [`RenderBackend3D`] traits, which a concrete
//! backend (GLFW + GL, Vulkan, ...) implements in its own crate.
//!
//! This module also ships [`HeadlessBackend2D`] and [`HeadlessBackend3D`]:
//! windowless adapters that validate resources and record every draw
//! command with its flattened matrix. They serve hosts without a display
//! and back the engine's own test suite.

mod backend;
mod headless;

pub use backend::{Image2D, KeyCallback, Model3D, RenderBackend2D, RenderBackend3D};
pub use headless::{
    HeadlessBackend2D, HeadlessBackend3D, HeadlessImage, HeadlessModel, RecordedDraw2D,
    RecordedDraw3D,
};

use thiserror::Error;

/// Errors surfaced by a rendering backend
#[derive(Debug, Error)]
pub enum RenderError {
    /// Window or context creation failed; fatal at scene construction
    #[error("renderer initialization failed: {0}")]
    Init(String),

    /// A resource path did not resolve to a decodable image or model
    #[error("failed to load resource '{path}': {reason}")]
    ResourceLoad {
        /// The path that failed to load
        path: String,
        /// Backend-specific failure description
        reason: String,
    },
}

/// Result type for backend operations
pub type RenderResult<T> = Result<T, RenderError>;
