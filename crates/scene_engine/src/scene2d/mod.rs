//! 2D scene stack
//!
//! Immutable [`Vector2`] and [`Transform2D`] value types, the [`Sprite`]
//! positionable, and the [`Scenegraph2D`] frame orchestrator. The tree
//! structure itself is shared with the 3D stack through
//! [`crate::scene::SceneNode`].

mod graph;
mod sprite;
mod transform;
mod vector;

pub use graph::Scenegraph2D;
pub use sprite::Sprite;
pub use transform::Transform2D;
pub use vector::Vector2;

/// Scene tree node wrapping a [`Sprite`]
pub type SceneNode2D = crate::scene::SceneNode<Sprite>;

/// Reference-counting handle to a 2D scene node
pub type SharedNode2D = crate::scene::SharedNode<Sprite>;
