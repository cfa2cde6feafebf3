//! Rust language support, backed by tree-sitter-rust.

use super::LanguageSupport;
use crate::types::Language;

/// Tree-sitter node kind constants for Rust grammar.
///
/// These match the node types defined in tree-sitter-rust. Using constants
/// prevents typos and makes supported node types explicit.
mod node_kinds {
    // Item declarations
    pub const FUNCTION_ITEM: &str = "function_item";
    pub const STRUCT_ITEM: &str = "struct_item";
    pub const ENUM_ITEM: &str = "enum_item";
    pub const UNION_ITEM: &str = "union_item";
    pub const TRAIT_ITEM: &str = "trait_item";
    pub const IMPL_ITEM: &str = "impl_item";
    pub const MOD_ITEM: &str = "mod_item";
    pub const MACRO_DEFINITION: &str = "macro_definition";

    // Expressions that open a scope
    pub const CLOSURE_EXPRESSION: &str = "closure_expression";
    pub const IF_EXPRESSION: &str = "if_expression";
    pub const MATCH_EXPRESSION: &str = "match_expression";
    pub const LOOP_EXPRESSION: &str = "loop_expression";
    pub const FOR_EXPRESSION: &str = "for_expression";
    pub const WHILE_EXPRESSION: &str = "while_expression";
    pub const UNSAFE_BLOCK: &str = "unsafe_block";
    pub const ASYNC_BLOCK: &str = "async_block";
}

/// Rust language support implementation.
pub struct RustLanguage;

impl LanguageSupport for RustLanguage {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn scope_label(&self, kind: &str) -> Option<&'static str> {
        use node_kinds::{
            ASYNC_BLOCK, CLOSURE_EXPRESSION, ENUM_ITEM, FOR_EXPRESSION, FUNCTION_ITEM,
            IF_EXPRESSION, IMPL_ITEM, LOOP_EXPRESSION, MACRO_DEFINITION, MATCH_EXPRESSION,
            MOD_ITEM, STRUCT_ITEM, TRAIT_ITEM, UNION_ITEM, UNSAFE_BLOCK, WHILE_EXPRESSION,
        };

        match kind {
            FUNCTION_ITEM | CLOSURE_EXPRESSION => Some("function"),
            STRUCT_ITEM | UNION_ITEM => Some("struct"),
            ENUM_ITEM => Some("enum"),
            TRAIT_ITEM => Some("trait"),
            IMPL_ITEM => Some("impl"),
            MOD_ITEM => Some("module"),
            MACRO_DEFINITION => Some("macro"),
            IF_EXPRESSION | MATCH_EXPRESSION | LOOP_EXPRESSION | FOR_EXPRESSION
            | WHILE_EXPRESSION | UNSAFE_BLOCK | ASYNC_BLOCK => Some("block"),
            _ => None,
        }
    }
}
