/// A node of an owned binary tree.
///
/// Each node exclusively owns its subtrees; an absent child is `None`. Trees are built wholesale
/// by [`crate::levelorder::decode`] or [`crate::dense::decode`] and dropped as a unit when the
/// root goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The node's value.
    pub val: i64,
    /// The left subtree, if any.
    pub left: Option<Box<TreeNode>>,
    /// The right subtree, if any.
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(val: i64) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given subtrees.
    #[must_use]
    pub fn with_children(
        val: i64,
        left: Option<Box<TreeNode>>,
        right: Option<Box<TreeNode>>,
    ) -> Self {
        TreeNode { val, left, right }
    }

    /// The number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }

    /// The height of this subtree in nodes; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .left
            .as_ref()
            .map_or(0, |n| n.depth())
            .max(self.right.as_ref().map_or(0, |n| n.depth()))
    }
}

#[test]
fn test_node_count() {
    let tree = TreeNode::with_children(
        1,
        Some(Box::new(TreeNode::new(2))),
        Some(Box::new(TreeNode::with_children(
            3,
            Some(Box::new(TreeNode::new(4))),
            None,
        ))),
    );
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.depth(), 3);
}
