//! Enclosing-context search.
//!
//! Given a syntax tree and a 1-based inclusive line range, find the node that
//! spans the whole range and has the greatest row extent.
//!
//! ## Selection rule
//!
//! A node *qualifies* when `start_line <= line_start && line_end <= end_line`.
//! Among qualifying nodes the one with the largest `end_row - start_row` wins.
//! The running best starts at size 0 with no node and is only replaced by a
//! strictly larger size, so:
//!
//! - ties go to the node met first in a pre-order walk (parents before
//!   children), which makes the result the *outermost* qualifying node;
//! - single-line nodes have size 0 and are never reported.
//!
//! Both properties are relied on by callers that attach this context to diff
//! hunks, so they are kept as-is.
//!
//! The search is generic over [`SyntaxTree`], so it runs the same way over a
//! live `tree_sitter::Tree` and over a detached [`OutlineTree`](crate::OutlineTree).

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::LineRange;

/// A node of a concrete syntax tree, as seen by the finder.
///
/// Rows are 0-based, as tree-sitter reports them.
pub trait SyntaxNode: Sized {
    /// Grammar kind of this node.
    fn node_kind(&self) -> &str;

    /// 0-based row of the node's first character.
    fn start_row(&self) -> usize;

    /// 0-based row of the node's end position.
    fn end_row(&self) -> usize;

    /// 0-based column of the node's first character.
    fn start_column(&self) -> usize;

    /// 0-based column of the node's end position.
    fn end_column(&self) -> usize;

    /// Direct children, in source order.
    fn child_nodes(&self) -> Vec<Self>;

    /// 1-based line of the node's first character.
    fn start_line(&self) -> usize {
        self.start_row() + 1
    }

    /// 1-based line of the node's end position.
    fn end_line(&self) -> usize {
        self.end_row() + 1
    }

    /// Row delta used to rank candidates. A single-line node has size 0.
    fn row_span(&self) -> usize {
        self.end_row().saturating_sub(self.start_row())
    }

    /// Whether this node's lines cover `range` on both ends.
    fn spans(&self, range: LineRange) -> bool {
        self.start_line() <= range.line_start() && range.line_end() <= self.end_line()
    }
}

/// A parsed tree the finder can walk.
pub trait SyntaxTree {
    /// Node handle type, borrowing from the tree.
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    /// The root node, or `None` for a tree that has none.
    fn root_node(&self) -> Option<Self::Node<'_>>;
}

/// The node found for a line range, if any.
///
/// Holds a handle into the searched tree; nothing is copied out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnclosingContext<N> {
    node: Option<N>,
}

impl<N> EnclosingContext<N> {
    /// A result with no qualifying node.
    #[must_use]
    pub fn none() -> Self {
        Self { node: None }
    }

    /// The located node, if one qualified.
    #[must_use]
    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    /// Consume the result, yielding the located node.
    #[must_use]
    pub fn into_node(self) -> Option<N> {
        self.node
    }

    /// Whether a node was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.node.is_some()
    }
}

/// Find the enclosing context of `range` in `tree`.
///
/// Visits every node exactly once, in pre-order.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the tree has no root node. A range that
/// no node spans (for example, past the end of the file) is not an error; it
/// yields an empty [`EnclosingContext`].
pub fn find_enclosing_context<T>(
    tree: &T,
    range: LineRange,
) -> Result<EnclosingContext<T::Node<'_>>>
where
    T: SyntaxTree + ?Sized,
{
    let root = tree
        .root_node()
        .ok_or_else(|| Error::InvalidInput("syntax tree has no root node".to_string()))?;

    debug!(
        line_start = range.line_start(),
        line_end = range.line_end(),
        "Searching for enclosing context"
    );

    let mut largest_size = 0;
    let mut largest = None;
    let mut visited = 0usize;

    // Children are pushed in reverse so the leftmost child is popped first.
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visited += 1;

        let mut children = node.child_nodes();
        children.reverse();

        if node.spans(range) {
            let size = node.row_span();
            if size > largest_size {
                largest_size = size;
                largest = Some(node);
            }
        }

        stack.extend(children);
    }

    trace!(visited, "Traversal complete");
    match &largest {
        Some(node) => debug!(
            kind = %node.node_kind(),
            start_line = node.start_line(),
            end_line = node.end_line(),
            size = largest_size,
            "Found enclosing context"
        ),
        None => debug!("No node spans the requested range"),
    }

    Ok(EnclosingContext { node: largest })
}

// ============================================================================
// tree-sitter bindings
// ============================================================================

impl SyntaxNode for tree_sitter::Node<'_> {
    fn node_kind(&self) -> &str {
        self.kind()
    }

    fn start_row(&self) -> usize {
        self.start_position().row
    }

    fn end_row(&self) -> usize {
        self.end_position().row
    }

    fn start_column(&self) -> usize {
        self.start_position().column
    }

    fn end_column(&self) -> usize {
        self.end_position().column
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }
}

impl SyntaxTree for tree_sitter::Tree {
    type Node<'a> = tree_sitter::Node<'a>;

    fn root_node(&self) -> Option<Self::Node<'_>> {
        Some(tree_sitter::Tree::root_node(self))
    }
}
