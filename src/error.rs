//! Errors reported by [`Tree::validate`](crate::tree::Tree::validate).

use thiserror::Error;

/// A broken structural invariant. Depths are counted from the root, which has depth 0.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A value in some node's left subtree is not strictly less than that node's value.
    #[error("node at depth {depth} is not less than an ancestor whose left subtree holds it")]
    LeftOrder {
        /// Depth of the offending node.
        depth: usize,
    },
    /// A value in some node's right subtree is less than that node's value.
    #[error("node at depth {depth} is less than an ancestor whose right subtree holds it")]
    RightOrder {
        /// Depth of the offending node.
        depth: usize,
    },
    /// A node's parent back-reference doesn't name the node that links to it.
    #[error("node at depth {depth} has a stale parent back-reference")]
    ParentLink {
        /// Depth of the offending node.
        depth: usize,
    },
    /// Some allocated nodes can't be reached from the root.
    #[error("{live} nodes are allocated but only {reachable} are reachable from the root")]
    Unreachable {
        /// Nodes currently allocated.
        live: usize,
        /// Nodes found by walking down from the root.
        reachable: usize,
    },
}
