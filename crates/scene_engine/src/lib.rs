//! Hierarchical 2D/3D scene graphs over an immutable transform algebra.
//!
//! The crate has three layers:
//!
//! - **Value types** ([`scene2d::Vector2`], [`scene2d::Transform2D`] and
//!   their 3D mirrors): immutable vectors and `Copy` affine transforms.
//!   Mutating transform calls compose on the left, so the most recent
//!   operation acts on everything accumulated before it.
//! - **Scene tree** ([`scene::SceneNode`]): a generic parent/child tree of
//!   positionables. Nodes hold strong references to children and a weak
//!   back-reference to the parent; dropping a subtree's last external
//!   handle reclaims it.
//! - **Frame orchestration** ([`scene2d::Scenegraph2D`],
//!   [`scene3d::Scenegraph3D`]): owns a [`render::RenderBackend2D`] or
//!   [`render::RenderBackend3D`], loads sprites, and renders a frame by
//!   traversing the tree pre-order while concatenating world transforms.
//!
//! The headless backends in [`render`] validate resources and record draw
//! commands, which keeps the whole stack testable without a display.
//!
//! ```no_run
//! use scene_engine::render::HeadlessBackend2D;
//! use scene_engine::scene::SceneNode;
//! use scene_engine::scene2d::{Scenegraph2D, Vector2};
//!
//! # fn main() -> Result<(), scene_engine::render::RenderError> {
//! let mut scene = Scenegraph2D::<HeadlessBackend2D>::new("demo", 800, 600)?;
//!
//! let mut sprite = scene.load_sprite("assets/mandrill.png")?;
//! sprite.set_handle(sprite.size() / 2.0);
//! sprite.set_translation(Vector2::new(400.0, 300.0));
//!
//! let root = SceneNode::create(sprite);
//! scene.render_frame(&root);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn
)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod scene2d;
pub mod scene3d;

pub use config::{ConfigError, EngineConfig, WindowConfig};
