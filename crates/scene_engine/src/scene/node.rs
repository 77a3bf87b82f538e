//! Scene graph nodes and the recursive draw traversal
//!
//! Nodes are reference counted: the parent's child list and any handle the
//! host still holds keep a node alive, while the child-to-parent edge is a
//! [`Weak`] observation pointer used only for unlink-on-reparent. Dropping
//! the last handle to a subtree root therefore reclaims every descendant
//! that is not separately retained. [`SceneNode::add_child`] refuses any
//! link that would close a cycle, keeping the child lists a forest.

use log::warn;
use std::cell::RefCell;
use std::ops::Mul;
use std::rc::{Rc, Weak};

/// A drawable element that derives a local transform from its own state.
///
/// Implemented by [`crate::scene2d::Sprite`] and
/// [`crate::scene3d::Sprite3D`]; the scene tree only ever talks to this
/// trait.
pub trait Positionable {
    /// The transform value type composed down the tree
    type Transform: Copy + Mul<Output = Self::Transform>;

    /// The rendering backend this element draws through
    type Backend: ?Sized;

    /// The local transform derived from handle, translation and rotation
    fn local_transform(&self) -> Self::Transform;

    /// Draw with `world` overriding the local transform
    fn draw_with(&self, backend: &mut Self::Backend, world: &Self::Transform);
}

/// Reference-counting handle to a [`SceneNode`].
///
/// This is how hosts refer to nodes; a node lives as long as any shared
/// handle (the host's own or a parent's child-list entry) references it.
pub type SharedNode<P> = Rc<RefCell<SceneNode<P>>>;

/// One node in the scene tree.
///
/// Owns one positionable and an ordered list of child handles; holds a
/// non-owning back-reference to its parent.
pub struct SceneNode<P: Positionable> {
    positionable: P,
    children: Vec<SharedNode<P>>,
    parent: Weak<RefCell<SceneNode<P>>>,
}

impl<P: Positionable> SceneNode<P> {
    /// Create a detached node wrapping `positionable`.
    ///
    /// The positionable is moved in, state and resolved transform
    /// included; callers that want to keep using their template clone it
    /// first, and mutations of that original are never observed by the
    /// node. Changing the node's rendered state goes through
    /// [`Self::positionable_mut`].
    pub fn create(positionable: P) -> SharedNode<P> {
        Rc::new(RefCell::new(Self {
            positionable,
            children: Vec::new(),
            parent: Weak::new(),
        }))
    }

    /// Make `child` a child of `parent`.
    ///
    /// Re-parenting is always safe and total: a node that already has a
    /// parent is first removed from that parent's child list, so a node
    /// appears in at most one child list at a time. The child is appended
    /// to the end of `parent`'s list and draws last among its siblings.
    ///
    /// Adding a node under itself or under one of its own descendants
    /// would close a cycle; such a request is rejected (logged, tree
    /// unchanged).
    pub fn add_child(parent: &SharedNode<P>, child: &SharedNode<P>) {
        if Self::is_self_or_ancestor_of(child, parent) {
            warn!("add_child rejected: the link would close a tree cycle");
            return;
        }
        let previous = child.borrow().parent.upgrade();
        if let Some(previous) = previous {
            previous
                .borrow_mut()
                .children
                .retain(|existing| !Rc::ptr_eq(existing, child));
        }
        child.borrow_mut().parent = Rc::downgrade(parent);
        parent.borrow_mut().children.push(Rc::clone(child));
    }

    /// Remove `child` from `parent`'s child list, clearing its parent
    /// back-reference. Idempotent: removing a node that is not a child is
    /// a no-op, not an error.
    pub fn remove_child(parent: &SharedNode<P>, child: &SharedNode<P>) {
        let removed = {
            let mut parent_ref = parent.borrow_mut();
            let before = parent_ref.children.len();
            parent_ref
                .children
                .retain(|existing| !Rc::ptr_eq(existing, child));
            parent_ref.children.len() != before
        };
        if removed {
            child.borrow_mut().parent = Weak::new();
        }
    }

    /// Whether `candidate` is `node` itself or an ancestor of `node`
    fn is_self_or_ancestor_of(candidate: &SharedNode<P>, node: &SharedNode<P>) -> bool {
        let mut current = Some(Rc::clone(node));
        while let Some(visited) = current {
            if Rc::ptr_eq(&visited, candidate) {
                return true;
            }
            current = visited.borrow().parent.upgrade();
        }
        false
    }

    /// Borrow the wrapped positionable
    pub fn positionable(&self) -> &P {
        &self.positionable
    }

    /// Mutably borrow the wrapped positionable.
    ///
    /// This is how a node's rendered state is changed after creation.
    pub fn positionable_mut(&mut self) -> &mut P {
        &mut self.positionable
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether `node` is a direct child of this node
    pub fn has_child(&self, node: &SharedNode<P>) -> bool {
        self.children.iter().any(|child| Rc::ptr_eq(child, node))
    }

    /// Upgrade the parent back-reference, if the parent is still alive
    pub fn parent(&self) -> Option<SharedNode<P>> {
        self.parent.upgrade()
    }

    /// Draw this node and all of its descendants.
    ///
    /// Computes `world = parent_transform * local`, draws the positionable
    /// with `world`, then recurses into every child in list order passing
    /// `world` down as their parent transform. Depth-first, pre-order: a
    /// node draws before its children.
    pub fn draw(&self, backend: &mut P::Backend, parent_transform: P::Transform) {
        let world = parent_transform * self.positionable.local_transform();
        self.positionable.draw_with(backend, &world);
        for child in &self.children {
            child.borrow().draw(backend, world);
        }
    }
}
