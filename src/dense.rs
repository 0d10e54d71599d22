//! The implicit-index ("dense") tree codec variant.
//!
//! Some problems hand the tree over as a plain level-order array with positional indexing:
//! the root lives at index 0 and the children of index `i` live at `2i + 1` and `2i + 2`.
//! This is a different convention from the [`crate::levelorder`] wire format — there, a
//! `null` node's children are skipped entirely; here, every index up to the array length is
//! addressable and an out-of-range or `null` index simply means an absent subtree. The two
//! must not be conflated, so this lives in its own module.
//!
//! Only decoding exists: the original boilerplate never writes this form, and the dense
//! rendering of a sparse tree is exponential in its depth.

use crate::token::{parse_tokens, Token};
use crate::{Error, TreeNode};

/// Decode a dense positional token line into a tree.
///
/// The token grammar is the same as for [`crate::levelorder::decode`], and the empty string
/// and bare `null` are likewise the no-tree result.
///
/// ```rust
/// use judgeio::dense::decode;
///
/// let tree = decode("1,null,3,null,null,7").unwrap().unwrap();
/// assert!(tree.left.is_none());
/// assert_eq!(tree.right.as_ref().unwrap().val, 3);
/// assert_eq!(tree.right.as_ref().unwrap().left.as_ref().unwrap().val, 7);
/// ```
pub fn decode(text: &str) -> Result<Option<Box<TreeNode>>, Error> {
    let text = text.trim();
    if text.is_empty() || text == "null" {
        return Ok(None);
    }
    let tokens = parse_tokens(text)?;
    Ok(subtree(&tokens, 0))
}

fn subtree(tokens: &[Token], index: usize) -> Option<Box<TreeNode>> {
    match tokens.get(index)? {
        Token::Null => None,
        Token::Num(val) => Some(Box::new(TreeNode::with_children(
            *val,
            subtree(tokens, 2 * index + 1),
            subtree(tokens, 2 * index + 2),
        ))),
    }
}
