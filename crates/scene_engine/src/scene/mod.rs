//! Scene tree core
//!
//! The tree structure is dimension-independent: a [`SceneNode`] wraps any
//! [`Positionable`] (a sprite in 2D, a model sprite in 3D) and propagates
//! the parent's accumulated world transform down to each child during the
//! recursive draw traversal.

mod node;

pub use node::{Positionable, SceneNode, SharedNode};

use thiserror::Error;

/// Errors from sprite state operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpriteError {
    /// The transform is derived state; it cannot be assigned directly
    #[error(
        "sprite transforms are derived from handle, translation and rotation \
         and cannot be set directly"
    )]
    TransformNotSettable,
}
