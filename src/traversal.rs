//! Depth-first and breadth-first walks over a [`Tree`]. Each walk collects references to every
//! value into a `Vec`.

use std::collections::VecDeque;

use crate::arena::Link;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Values in pre-order: a node, then its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.dfs_pre_order(), [&5, &3, &1, &4, &8]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut result = Vec::new();
        self.pre_order_into(self.root, &mut result);
        result
    }

    /// Values in in-order: a node's left subtree, then the node, then its right subtree. This is
    /// sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &5, &8]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut result = Vec::new();
        self.in_order_into(self.root, &mut result);
        result
    }

    /// Values in post-order: a node's left subtree, then its right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.dfs_post_order(), [&1, &4, &3, &8, &5]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut result = Vec::new();
        self.post_order_into(self.root, &mut result);
        result
    }

    /// Values level by level from the root, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.bfs(), [&5, &3, &8, &1, &4]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut queue: VecDeque<_> = self.root.into_iter().collect();

        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            result.push(&node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }

        result
    }

    fn pre_order_into<'a>(&'a self, link: Link, result: &mut Vec<&'a T>) {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        result.push(&node.value);
        self.pre_order_into(node.left, result);
        self.pre_order_into(node.right, result);
    }

    fn in_order_into<'a>(&'a self, link: Link, result: &mut Vec<&'a T>) {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        self.in_order_into(node.left, result);
        result.push(&node.value);
        self.in_order_into(node.right, result);
    }

    fn post_order_into<'a>(&'a self, link: Link, result: &mut Vec<&'a T>) {
        let Some(id) = link else {
            return;
        };
        let node = &self.nodes[id];
        self.post_order_into(node.left, result);
        self.post_order_into(node.right, result);
        result.push(&node.value);
    }
}
