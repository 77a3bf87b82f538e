//! 3D scene stack
//!
//! The 3D mirror of [`crate::scene2d`]: immutable [`Vector3`] and
//! [`Transform3D`] value types, the [`Sprite3D`] positionable wrapping a
//! model, and the [`Scenegraph3D`] frame orchestrator. Rotations are Euler
//! angles applied in X, Y, Z order.

mod graph;
mod sprite;
mod transform;
mod vector;

pub use graph::Scenegraph3D;
pub use sprite::Sprite3D;
pub use transform::Transform3D;
pub use vector::Vector3;

/// Scene tree node wrapping a [`Sprite3D`]
pub type SceneNode3D = crate::scene::SceneNode<Sprite3D>;

/// Reference-counting handle to a 3D scene node
pub type SharedNode3D = crate::scene::SharedNode<Sprite3D>;
