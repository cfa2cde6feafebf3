//! C# language support, backed by tree-sitter-c-sharp.

use super::LanguageSupport;
use crate::types::Language;

/// Tree-sitter node kind constants for C# grammar.
mod node_kinds {
    // Type declarations
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const STRUCT_DECLARATION: &str = "struct_declaration";
    pub const INTERFACE_DECLARATION: &str = "interface_declaration";
    pub const RECORD_DECLARATION: &str = "record_declaration";
    pub const ENUM_DECLARATION: &str = "enum_declaration";
    pub const NAMESPACE_DECLARATION: &str = "namespace_declaration";

    // Member declarations
    pub const METHOD_DECLARATION: &str = "method_declaration";
    pub const CONSTRUCTOR_DECLARATION: &str = "constructor_declaration";
    pub const PROPERTY_DECLARATION: &str = "property_declaration";
    pub const LOCAL_FUNCTION_STATEMENT: &str = "local_function_statement";
    pub const LAMBDA_EXPRESSION: &str = "lambda_expression";
}

/// C# language support implementation.
pub struct CSharpLanguage;

impl LanguageSupport for CSharpLanguage {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_c_sharp::LANGUAGE.into()
    }

    fn scope_label(&self, kind: &str) -> Option<&'static str> {
        use node_kinds::{
            CLASS_DECLARATION, CONSTRUCTOR_DECLARATION, ENUM_DECLARATION, INTERFACE_DECLARATION,
            LAMBDA_EXPRESSION, LOCAL_FUNCTION_STATEMENT, METHOD_DECLARATION,
            NAMESPACE_DECLARATION, PROPERTY_DECLARATION, RECORD_DECLARATION, STRUCT_DECLARATION,
        };

        match kind {
            CLASS_DECLARATION => Some("class"),
            STRUCT_DECLARATION => Some("struct"),
            INTERFACE_DECLARATION => Some("interface"),
            RECORD_DECLARATION => Some("record"),
            ENUM_DECLARATION => Some("enum"),
            NAMESPACE_DECLARATION => Some("namespace"),
            METHOD_DECLARATION | LOCAL_FUNCTION_STATEMENT | LAMBDA_EXPRESSION => Some("method"),
            CONSTRUCTOR_DECLARATION => Some("constructor"),
            PROPERTY_DECLARATION => Some("property"),
            _ => None,
        }
    }
}
