//! Shared tree-sitter utilities.
//!
//! Provides common functions for extracting text and positions from tree-sitter
//! nodes, and for turning a located node into an owned [`NodeSummary`].

// Tree-sitter returns usize for positions, but Span stores u32 for compactness.
// This is safe for practical source files (no file has 4 billion lines).
#![allow(clippy::cast_possible_truncation)]

use super::LanguageSupport;
use crate::finder::SyntaxNode;
use crate::types::{NodeSummary, Span};

/// Get text content of a tree-sitter node.
///
/// Returns `None` if the node's byte range contains invalid UTF-8.
pub fn node_text(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    match std::str::from_utf8(&content[node.byte_range()]) {
        Ok(s) => Some(s.to_string()),
        Err(e) => {
            tracing::trace!(
                byte_range = ?node.byte_range(),
                error = %e,
                node_kind = %node.kind(),
                "Failed to decode node text as UTF-8"
            );
            None
        }
    }
}

/// Convert a node's 0-indexed rows and columns to our 1-indexed Span type.
///
/// Falls back to a single-character span if the node produces invalid positions.
pub fn node_span<N: SyntaxNode>(node: &N) -> Span {
    let start_line = node.start_row() as u32 + 1;
    let start_col = node.start_column() as u32 + 1;
    let end_line = node.end_row() as u32 + 1;
    let end_col = node.end_column() as u32 + 1;

    Span::new(start_line, start_col, end_line, end_col).unwrap_or_else(|| {
        tracing::warn!(
            start_line,
            start_col,
            end_line,
            end_col,
            node_kind = %node.node_kind(),
            "Syntax node has an invalid span, using fallback"
        );
        // Fallback: single-character span at start position
        Span {
            start_line,
            start_column: start_col,
            end_line: start_line,
            end_column: start_col + 1,
        }
    })
}

/// Text of the node's `name` field, if the grammar defines one for this kind.
pub fn node_name(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| node_text(&name, content))
}

/// Describe a located node without borrowing the tree.
///
/// Text that is not valid UTF-8 is replaced lossily rather than dropped, so
/// the summary always carries the node's source.
pub fn summarize(
    node: &tree_sitter::Node,
    content: &[u8],
    support: &dyn LanguageSupport,
) -> NodeSummary {
    let text = node_text(node, content)
        .unwrap_or_else(|| String::from_utf8_lossy(&content[node.byte_range()]).into_owned());

    NodeSummary {
        kind: node.kind().to_string(),
        label: support.scope_label(node.kind()).map(str::to_string),
        name: node_name(node, content),
        span: node_span(node),
        size: node.row_span(),
        child_count: node.child_count(),
        text,
    }
}
