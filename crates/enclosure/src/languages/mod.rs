//! Bundled tree-sitter grammars.
//!
//! Each supported language implements the `LanguageSupport` trait, which
//! supplies the grammar and names the node kinds a reader would call a scope
//! ("inside function `foo`").
//!
//! ## Adding a New Language
//!
//! 1. Add the variant to `Language` enum in `types.rs`
//! 2. Create a new module (e.g., `go.rs`)
//! 3. Implement `LanguageSupport` trait
//! 4. Register in `get_language_support()`
//!
//! Grammar selection is always explicit: callers pick a `Language` (usually
//! from the file extension) and this module hands back its support.

pub mod csharp;
pub mod python;
pub mod rust;
pub mod tree_sitter_utils;

use crate::types::Language;

/// Get the language support implementation for a language.
#[must_use]
pub fn get_language_support(lang: Language) -> &'static dyn LanguageSupport {
    match lang {
        Language::Python => &python::PythonLanguage,
        Language::Rust => &rust::RustLanguage,
        Language::CSharp => &csharp::CSharpLanguage,
    }
}

/// Trait for language-specific grammar support.
pub trait LanguageSupport: Send + Sync {
    /// Which `Language` this implements.
    fn language(&self) -> Language;

    /// File extensions this language handles.
    fn extensions(&self) -> &'static [&'static str] {
        self.language().extensions()
    }

    /// Get the tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Human-readable scope label for a grammar node kind.
    ///
    /// Returns `None` for kinds that are not named scopes (expressions,
    /// statements, the file root).
    fn scope_label(&self, kind: &str) -> Option<&'static str>;
}
