//! Questions about the shape of a [`Tree`] rather than about any one value.

use crate::arena::{Link, NodeId};
use crate::error::InvariantError;
use crate::tree::Tree;

/// What a bottom-up pass learns about one subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Balance {
    balanced: bool,
    /// Levels below the subtree root. An empty subtree has a height of -1 and a single node a
    /// height of 0.
    height: isize,
}

impl<T> Tree<T> {
    /// Whether, for every node, the heights of its two subtrees differ by at most one. An empty
    /// tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let bushy: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert!(bushy.is_balanced());
    ///
    /// let stick: Tree<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert!(!stick.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.balance(self.root).balanced
    }

    /// The number of edges on the longest path from the root down to a leaf. `None` for an empty
    /// tree.
    pub fn height(&self) -> Option<usize> {
        usize::try_from(self.balance(self.root).height).ok()
    }

    fn balance(&self, link: Link) -> Balance {
        let Some(id) = link else {
            return Balance {
                balanced: true,
                height: -1,
            };
        };
        let node = &self.nodes[id];
        let left = self.balance(node.left);
        let right = self.balance(node.right);

        Balance {
            balanced: left.balanced
                && right.balanced
                && (left.height - right.height).abs() <= 1,
            height: left.height.max(right.height) + 1,
        }
    }

    /// Finds the second highest value by walking down the right spine and remembering the node
    /// before the last one.
    ///
    /// **Note** This doesn't look inside the left subtree of the largest node. When that subtree
    /// isn't empty, the true second highest value lives there but the spine predecessor is
    /// returned anyway. In particular a root with no right child gives `None` no matter how many
    /// values the tree holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&5));
    ///
    /// let single: Tree<_> = [5].into_iter().collect();
    /// assert_eq!(single.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut runner = self.root?;
        let mut previous = None;
        while let Some(right) = self.nodes[runner].right {
            previous = Some(runner);
            runner = right;
        }

        previous.map(|id| &self.nodes[id].value)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Checks every structural invariant of the tree: values on the left of a node are strictly
    /// smaller, values on the right are greater or equal, every parent back-reference names the
    /// node that actually links to it, and no node is unreachable from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 3].into_iter().collect();
    /// tree.remove(&5);
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return match self.nodes.live() {
                0 => Ok(()),
                live => Err(InvariantError::Unreachable { live, reachable: 0 }),
            };
        };
        if self.nodes[root].parent.is_some() {
            return Err(InvariantError::ParentLink { depth: 0 });
        }

        let reachable = self.validate_below(root, 0, None, None)?;
        let live = self.nodes.live();
        if reachable != live {
            return Err(InvariantError::Unreachable { live, reachable });
        }
        Ok(())
    }

    /// Validates the subtree rooted at `id`, whose values must lie in `[lower, upper)`, and
    /// returns how many nodes it holds.
    fn validate_below(
        &self,
        id: NodeId,
        depth: usize,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<usize, InvariantError> {
        let node = &self.nodes[id];
        if upper.is_some_and(|upper| node.value >= *upper) {
            return Err(InvariantError::LeftOrder { depth });
        }
        if lower.is_some_and(|lower| node.value < *lower) {
            return Err(InvariantError::RightOrder { depth });
        }

        let mut count = 1;
        if let Some(left) = node.left {
            if self.nodes[left].parent != Some(id) {
                return Err(InvariantError::ParentLink { depth: depth + 1 });
            }
            count += self.validate_below(left, depth + 1, lower, Some(&node.value))?;
        }
        if let Some(right) = node.right {
            if self.nodes[right].parent != Some(id) {
                return Err(InvariantError::ParentLink { depth: depth + 1 });
            }
            count += self.validate_below(right, depth + 1, Some(&node.value), upper)?;
        }
        Ok(count)
    }
}
