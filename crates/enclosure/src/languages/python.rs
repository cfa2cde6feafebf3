//! Python language support, backed by tree-sitter-python.

use super::LanguageSupport;
use crate::types::Language;

/// Tree-sitter node kind constants for the Python grammar.
mod node_kinds {
    pub const FUNCTION_DEFINITION: &str = "function_definition";
    pub const CLASS_DEFINITION: &str = "class_definition";
    pub const DECORATED_DEFINITION: &str = "decorated_definition";
    pub const LAMBDA: &str = "lambda";
    pub const IF_STATEMENT: &str = "if_statement";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const WHILE_STATEMENT: &str = "while_statement";
    pub const WITH_STATEMENT: &str = "with_statement";
    pub const TRY_STATEMENT: &str = "try_statement";
    pub const MATCH_STATEMENT: &str = "match_statement";
}

/// Python language support implementation.
pub struct PythonLanguage;

impl LanguageSupport for PythonLanguage {
    fn language(&self) -> Language {
        Language::Python
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn scope_label(&self, kind: &str) -> Option<&'static str> {
        use node_kinds::{
            CLASS_DEFINITION, DECORATED_DEFINITION, FOR_STATEMENT, FUNCTION_DEFINITION,
            IF_STATEMENT, LAMBDA, MATCH_STATEMENT, TRY_STATEMENT, WHILE_STATEMENT, WITH_STATEMENT,
        };

        match kind {
            FUNCTION_DEFINITION | LAMBDA => Some("function"),
            CLASS_DEFINITION => Some("class"),
            DECORATED_DEFINITION => Some("decorated definition"),
            IF_STATEMENT | FOR_STATEMENT | WHILE_STATEMENT | WITH_STATEMENT | TRY_STATEMENT
            | MATCH_STATEMENT => Some("block"),
            _ => None,
        }
    }
}
