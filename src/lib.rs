//! This crate exposes an unbalanced Binary Search Tree (BST) over a single
//! ordered type, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Inserting a value
//!    that is already present therefore adds a second copy to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree does nothing to
//! keep its height down, so inserting values in sorted order degenerates it
//! into a linked list. [`Tree::is_balanced`](tree::Tree::is_balanced) reports
//! whether that has happened.
//!
//! Nodes live in an arena and refer to their children and their parent by
//! index, so the parent back-reference never owns anything.
//!
//! ## Logging
//!
//! Enabling the `tracing` feature makes insertions and removals emit
//! `tracing` events describing the nodes they touch.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod error;
mod shape;
mod trace;
mod traversal;
pub mod tree;

pub use error::InvariantError;
pub use tree::{NodeRef, Tree};
