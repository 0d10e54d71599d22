//! The linked-list codec.
//!
//! `ListNode` inputs arrive as one line of whitespace-separated integers; an empty line is
//! the no-list result. There are no `null` placeholders — a list has no gaps to mark.

use crate::token::parse_int_row;
use crate::Error;

/// A node of an owned singly linked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// The node's value.
    pub val: i64,
    /// The rest of the list.
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    /// Create a node with no successor.
    #[must_use]
    pub fn new(val: i64) -> Self {
        ListNode { val, next: None }
    }
}

/// Decode a line of whitespace-separated integers into a list.
///
/// ```rust
/// use judgeio::list;
///
/// let head = list::decode("1 2 3").unwrap();
/// assert_eq!(list::values(head.as_deref()), vec![1, 2, 3]);
/// assert_eq!(list::decode("   ").unwrap(), None);
/// ```
pub fn decode(line: &str) -> Result<Option<Box<ListNode>>, Error> {
    let nums = parse_int_row(line)?;
    Ok(nums
        .into_iter()
        .rev()
        .fold(None, |next, val| Some(Box::new(ListNode { val, next }))))
}

/// Collect a list's values front to back.
#[must_use]
pub fn values(head: Option<&ListNode>) -> Vec<i64> {
    let mut out = Vec::new();
    let mut cursor = head;
    while let Some(node) = cursor {
        out.push(node.val);
        cursor = node.next.as_deref();
    }
    out
}
