//! Index addressed storage for tree nodes.
//!
//! Nodes refer to each other through [`NodeId`]s instead of pointers. This keeps every node owned
//! by exactly one place (the arena) while still letting a child name its parent.

use std::ops::{Index, IndexMut};

/// A stable handle to a slot in an [`Arena`]. A `NodeId` stays valid until the slot is released
/// with [`Arena::release`], after which the slot may be handed out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    // Only read by the logging macros.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// An optional edge to another node.
pub(crate) type Link = Option<NodeId>;

#[derive(Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    /// Released slots, reused last-in first-out.
    free: Vec<NodeId>,
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its handle.
    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node stored at `id` and hands it back to the caller.
    ///
    /// ## Panics
    ///
    /// When `id` has already been released.
    pub(crate) fn release(&mut self, id: NodeId) -> N {
        let node = self.slots[id.0]
            .take()
            .expect("Released a slot that was already vacant");
        self.free.push(id);
        node
    }

    /// The number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id.0]
            .as_ref()
            .expect("Link points at a vacant slot")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id.0]
            .as_mut()
            .expect("Link points at a vacant slot")
    }
}
