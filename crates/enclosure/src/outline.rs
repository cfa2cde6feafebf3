//! Detached syntax trees.
//!
//! An `OutlineTree` is an owned copy of just what the finder needs: node
//! kinds, positions and children. Trees produced by parsers other than the
//! bundled tree-sitter grammars can be converted into one (or deserialized
//! from JSON) and searched with the same [`find_enclosing_context`](crate::find_enclosing_context).

use serde::{Deserialize, Serialize};

use crate::finder::{SyntaxNode, SyntaxTree};

/// A 0-based row/column position, as tree-sitter reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 0-based row
    pub row: usize,
    /// 0-based column
    pub column: usize,
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

/// An owned syntax node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Grammar kind
    pub kind: String,
    /// Start position (inclusive)
    pub start: Position,
    /// End position
    pub end: Position,
    /// Children in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// A childless node spanning `start_row..=end_row` at column 0.
    #[must_use]
    pub fn new(kind: impl Into<String>, start_row: usize, end_row: usize) -> Self {
        Self {
            kind: kind.into(),
            start: Position {
                row: start_row,
                column: 0,
            },
            end: Position {
                row: end_row,
                column: 0,
            },
            children: Vec::new(),
        }
    }

    /// Replace this node's children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.children = children;
        self
    }

    /// Copy a tree-sitter subtree, anonymous nodes included.
    #[must_use]
    pub fn from_tree_sitter(node: tree_sitter::Node<'_>) -> Self {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .map(Self::from_tree_sitter)
            .collect();

        Self {
            kind: node.kind().to_string(),
            start: node.start_position().into(),
            end: node.end_position().into(),
            children,
        }
    }
}

impl<'a> SyntaxNode for &'a OutlineNode {
    fn node_kind(&self) -> &str {
        &self.kind
    }

    fn start_row(&self) -> usize {
        self.start.row
    }

    fn end_row(&self) -> usize {
        self.end.row
    }

    fn start_column(&self) -> usize {
        self.start.column
    }

    fn end_column(&self) -> usize {
        self.end.column
    }

    fn child_nodes(&self) -> Vec<&'a OutlineNode> {
        let node: &'a OutlineNode = self;
        node.children.iter().collect()
    }
}

/// An owned syntax tree. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTree {
    /// Root node, if any
    pub root: Option<OutlineNode>,
}

impl OutlineTree {
    /// A tree rooted at `root`.
    #[must_use]
    pub fn new(root: OutlineNode) -> Self {
        Self { root: Some(root) }
    }

    /// A tree with no nodes at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Snapshot a parsed tree-sitter tree.
    #[must_use]
    pub fn from_tree_sitter(tree: &tree_sitter::Tree) -> Self {
        Self::new(OutlineNode::from_tree_sitter(tree.root_node()))
    }
}

impl SyntaxTree for OutlineTree {
    type Node<'a> = &'a OutlineNode;

    fn root_node(&self) -> Option<Self::Node<'_>> {
        self.root.as_ref()
    }
}
