//! An unbalanced Binary Search Tree over a single ordered type. Values are stored in nodes that
//! live in an arena, and nodes link to their children and parent by index.
//!
//! Equal values are allowed. They're routed into the right subtree, so for every node all values
//! on its left are strictly smaller and all values on its right are greater or equal.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&5).is_none());
//!
//! // Inserts can be chained.
//! tree.insert(5).insert(3).insert(8);
//! assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
//!
//! // Nodes know their parent.
//! let three = tree.find(&3).unwrap();
//! assert_eq!(three.parent().map(|n| *n.value()), Some(5));
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert!(tree.find(&3).is_none());
//! assert_eq!(tree.remove(&3), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::arena::{Arena, Link, NodeId};
use crate::trace::{debug_log, trace_log};

/// A Binary Search Tree. This can be used for inserting, finding, and removing values and for
/// walking them in several orders. The tree never rebalances itself, so its shape is decided
/// entirely by the order values are inserted in.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) root: Link,
    pub(crate) nodes: Arena<Node<T>>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
    /// Back-reference to the node whose `left` or `right` is this node. `None` for the root.
    pub(crate) parent: Link,
}

impl<T> Node<T> {
    fn new(value: T, parent: Link) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            nodes: Arena::new(),
        }
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| self.node_ref(id))
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_, T> {
        NodeRef { tree: self, id }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts the value into the tree by walking down from the root until an empty slot is
    /// found. Returns the tree so inserts can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).insert(1).insert(3);
    ///
    /// assert_eq!(tree.bfs(), [&2, &1, &3]);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self {
        let Some(mut parent) = self.root else {
            let id = self.nodes.alloc(Node::new(value, None));
            trace_log!(slot = id.index(), "insert: new root");
            self.root = Some(id);
            return self;
        };

        let goes_left = loop {
            let node = &self.nodes[parent];
            let (goes_left, next) = if value < node.value {
                (true, node.left)
            } else {
                (false, node.right)
            };
            match next {
                Some(child) => parent = child,
                None => break goes_left,
            }
        };

        let id = self.nodes.alloc(Node::new(value, Some(parent)));
        if goes_left {
            self.nodes[parent].left = Some(id);
        } else {
            self.nodes[parent].right = Some(id);
        }
        trace_log!(
            slot = id.index(),
            parent = parent.index(),
            goes_left,
            "insert: attached"
        );

        self.debug_assert_ordered_below_parent(id);
        self
    }

    /// Same as [`insert`](Self::insert) but recurses down the tree, relinking each subtree root
    /// on the way back up. Both produce the same tree for the same sequence of inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut looped = Tree::new();
    /// let mut recursed = Tree::new();
    /// for x in [4, 2, 6, 4] {
    ///     looped.insert(x);
    ///     recursed.insert_recursive(x);
    /// }
    ///
    /// assert_eq!(looped.dfs_pre_order(), recursed.dfs_pre_order());
    /// ```
    pub fn insert_recursive(&mut self, value: T) -> &mut Self {
        let root = self.insert_below(self.root, None, value);
        self.root = Some(root);
        self
    }

    /// Inserts `value` into the subtree at `link` and returns that subtree's (possibly new) root.
    fn insert_below(&mut self, link: Link, parent: Link, value: T) -> NodeId {
        let Some(id) = link else {
            let id = self.nodes.alloc(Node::new(value, parent));
            trace_log!(slot = id.index(), "insert_recursive: allocated");
            return id;
        };

        if value < self.nodes[id].value {
            let left = self.nodes[id].left;
            let left = self.insert_below(left, Some(id), value);
            self.nodes[id].left = Some(left);
            self.debug_assert_ordered_below_parent(left);
        } else {
            let right = self.nodes[id].right;
            let right = self.insert_below(right, Some(id), value);
            self.nodes[id].right = Some(right);
            self.debug_assert_ordered_below_parent(right);
        }
        id
    }

    /// Potentially finds the node holding the given value. If no node matches, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).insert(2);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.value()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.locate(value).map(|id| self.node_ref(id))
    }

    /// Same as [`find`](Self::find) but recurses down the tree.
    pub fn find_recursive(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_below(self.root, value).map(|id| self.node_ref(id))
    }

    /// Whether some node holds the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    fn locate(&self, value: &T) -> Link {
        let mut runner = self.root;
        while let Some(id) = runner {
            let node = &self.nodes[id];
            runner = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn find_below(&self, link: Link, value: &T) -> Link {
        let id = link?;
        let node = &self.nodes[id];
        match value.cmp(&node.value) {
            Ordering::Less => self.find_below(node.left, value),
            Ordering::Equal => Some(id),
            Ordering::Greater => self.find_below(node.right, value),
        }
    }

    /// Removes one node holding the given value and returns that value. If the tree has no such
    /// value, nothing happens and `None` is returned.
    ///
    /// A node with two children isn't unlinked itself. Its in-order successor (the smallest value
    /// in its right subtree) is unlinked instead and its value moved into the node. The value
    /// returned is still the one that was asked for.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// // 8 has two children, so 9 takes its place.
    /// assert_eq!(tree.remove(&8), Some(8));
    /// assert_eq!(tree.dfs_pre_order(), [&5, &3, &9, &7]);
    /// assert_eq!(tree.remove(&8), None);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let target = self.locate(value)?;
        let node = &self.nodes[target];
        let parent = node.parent;

        match (node.left, node.right) {
            (None, None) => {
                debug_log!(slot = target.index(), "remove: leaf");
                self.replace_child(parent, target, None);
            }
            (None, Some(right)) => {
                debug_log!(slot = target.index(), "remove: splicing up right child");
                self.replace_child(parent, target, Some(right));
            }
            (Some(left), None) => {
                debug_log!(slot = target.index(), "remove: splicing up left child");
                self.replace_child(parent, target, Some(left));
            }
            (Some(_), Some(right)) => {
                let mut successor = right;
                let mut successor_parent = target;
                while let Some(left) = self.nodes[successor].left {
                    successor_parent = successor;
                    successor = left;
                }
                debug_log!(
                    slot = target.index(),
                    successor = successor.index(),
                    "remove: replacing with in-order successor"
                );

                // The successor has no left child so its right child can take its place.
                let successor_right = self.nodes[successor].right;
                self.replace_child(Some(successor_parent), successor, successor_right);
                let successor = self.nodes.release(successor);
                return Some(mem::replace(
                    &mut self.nodes[target].value,
                    successor.value,
                ));
            }
        }

        Some(self.nodes.release(target).value)
    }

    /// Points whichever edge of `parent` leads to `child` (or the root, if `parent` is `None`) at
    /// `replacement` and fixes the replacement's back-reference.
    fn replace_child(&mut self, parent: Link, child: NodeId, replacement: Link) {
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent_node = &mut self.nodes[parent];
                if parent_node.left == Some(child) {
                    parent_node.left = replacement;
                } else {
                    debug_assert_eq!(parent_node.right, Some(child));
                    parent_node.right = replacement;
                }
            }
        }

        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
    }

    /// In debug builds, asserts that a freshly attached node sits on the correct side of its
    /// parent.
    fn debug_assert_ordered_below_parent(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            let node = &self.nodes[id];
            if let Some(parent) = node.parent {
                let parent = &self.nodes[parent];
                if parent.left == Some(id) {
                    assert!(node.value < parent.value);
                } else {
                    assert_eq!(parent.right, Some(id));
                    assert!(node.value >= parent.value);
                }
            }
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A borrowed view of one node in a [`Tree`]. It can be used to look at the node's value and to
/// walk to its children or parent.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

// Manual implementations so `T` doesn't need to be `Clone`.
impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.tree.nodes[self.id].value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.nodes[self.id].left.map(|id| self.tree.node_ref(id))
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.nodes[self.id].right.map(|id| self.tree.node_ref(id))
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.tree.nodes[self.id].parent.map(|id| self.tree.node_ref(id))
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
