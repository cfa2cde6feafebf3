//! Tree-sitter parsing coordination.
//!
//! A `ParserHandle` binds one bundled grammar to a tree-sitter parser and is
//! owned by the caller; there is no process-wide parser. Handles are built
//! once (see [`ParserHandle::initialize`] or the
//! [`ParserRegistry`](crate::ParserRegistry)) and reused for every parse.
//!
//! ## Design
//!
//! The tree-sitter parser is stateful, so it sits behind a `Mutex`. That
//! makes a handle `Send + Sync`: share it through an `Arc` and concurrent
//! callers take turns for the duration of a single parse. Searching the
//! resulting tree needs no lock.

use std::fmt;
use std::sync::Mutex;

use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::finder::find_enclosing_context;
use crate::languages::get_language_support;
use crate::languages::tree_sitter_utils::summarize;
use crate::types::{Language, LineRange, NodeSummary, Validity};

/// Knobs applied to every parse made through a handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Abandon a parse that runs longer than this many microseconds.
    ///
    /// `None` lets tree-sitter run to completion.
    pub timeout_micros: Option<u64>,
}

/// A parser for one language grammar.
///
/// Implemented by [`ParserHandle`]; the provided methods are the operations
/// callers actually use.
pub trait SourceParser {
    /// The grammar this parser is bound to.
    fn language(&self) -> Language;

    /// Parse `text` into a syntax tree.
    ///
    /// A tree containing `ERROR` nodes is still a successful parse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the parse call itself gives up.
    fn parse(&self, text: &str) -> Result<tree_sitter::Tree>;

    /// Dry run: does the parse call complete for `text`?
    ///
    /// Error nodes inside a returned tree are not inspected. A failure with no
    /// message is reported as [`Validity::UNKNOWN_ERROR`].
    fn check_valid(&self, text: &str) -> Validity {
        match self.parse(text) {
            Ok(_) => {
                debug!(language = %self.language(), "Dry run parsed successfully");
                Validity::valid()
            }
            Err(Error::Parse(message)) => {
                warn!(language = %self.language(), error = %message, "Dry run failed");
                Validity::invalid(message)
            }
            Err(other) => {
                warn!(language = %self.language(), error = %other, "Dry run failed");
                Validity::invalid(other.to_string())
            }
        }
    }

    /// Parse `source` and describe the node enclosing `range`.
    ///
    /// Returns `Ok(None)` when no node spans the range.
    ///
    /// # Errors
    ///
    /// Propagates parse failures from [`SourceParser::parse`].
    fn enclosing_context(&self, source: &str, range: LineRange) -> Result<Option<NodeSummary>> {
        let tree = self.parse(source)?;
        let context = find_enclosing_context(&tree, range)?;
        let support = get_language_support(self.language());

        Ok(context
            .node()
            .map(|node| summarize(node, source.as_bytes(), support)))
    }
}

/// Caller-owned tree-sitter parser bound to one grammar.
pub struct ParserHandle {
    language: Language,
    options: ParseOptions,
    parser: Mutex<tree_sitter::Parser>,
}

impl ParserHandle {
    /// Bind `language`'s grammar to a fresh parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] if the grammar's ABI version is not
    /// supported by the linked tree-sitter runtime.
    pub fn new(language: Language, options: ParseOptions) -> Result<Self> {
        let support = get_language_support(language);

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&support.tree_sitter_language())
            .map_err(|e| Error::Initialization(format!("{language} grammar: {e}")))?;
        if let Some(timeout) = options.timeout_micros {
            parser.set_timeout_micros(timeout);
        }

        info!(
            %language,
            timeout_micros = ?options.timeout_micros,
            "Initialized parser"
        );

        Ok(Self {
            language,
            options,
            parser: Mutex::new(parser),
        })
    }

    /// Async factory for a handle.
    ///
    /// Grammar binding runs on tokio's blocking pool so an async caller is
    /// not stalled while it happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] if the grammar fails to load or the
    /// loading task is cancelled.
    pub async fn initialize(language: Language, options: ParseOptions) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::new(language, options))
            .await
            .map_err(|e| Error::Initialization(format!("grammar loading task failed: {e}")))?
    }

    /// Options this handle parses with.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options
    }
}

impl fmt::Debug for ParserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserHandle")
            .field("language", &self.language)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl SourceParser for ParserHandle {
    fn language(&self) -> Language {
        self.language
    }

    fn parse(&self, text: &str) -> Result<tree_sitter::Tree> {
        let mut parser = self
            .parser
            .lock()
            .map_err(|_| Error::Parse("parser lock poisoned by an earlier panic".to_string()))?;

        if let Some(tree) = parser.parse(text, None) {
            trace!(
                language = %self.language,
                bytes = text.len(),
                has_error = tree.root_node().has_error(),
                "Parsed source"
            );
            return Ok(tree);
        }

        // A halted parse would otherwise resume on the next call.
        parser.reset();

        let message = match self.options.timeout_micros {
            Some(timeout) => format!("parse exceeded timeout of {timeout} µs"),
            None => String::new(),
        };
        warn!(language = %self.language, bytes = text.len(), "Parser returned no tree");
        Err(Error::Parse(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python() -> ParserHandle {
        ParserHandle::new(Language::Python, ParseOptions::default())
            .expect("python grammar should load")
    }

    /// A parser whose parse call always fails with the given message.
    struct FailingParser(&'static str);

    impl SourceParser for FailingParser {
        fn language(&self) -> Language {
            Language::Python
        }

        fn parse(&self, _text: &str) -> Result<tree_sitter::Tree> {
            Err(Error::Parse(self.0.to_string()))
        }
    }

    #[test]
    fn valid_text_is_valid() {
        let validity = python().check_valid("def ok():\n    return 1\n");

        assert_eq!(validity, Validity::valid());
    }

    #[test]
    fn syntax_errors_still_parse() {
        // Error nodes inside a returned tree do not make a dry run fail.
        let validity = python().check_valid("def broken(:\n    return\n");

        assert!(validity.valid);
        assert!(validity.error.is_empty());
    }

    #[test]
    fn parse_failure_reports_message() {
        let validity = FailingParser("grammar rejected input").check_valid("anything");

        assert!(!validity.valid);
        assert_eq!(validity.error, "grammar rejected input");
    }

    #[test]
    fn parse_failure_without_message_is_unknown_error() {
        let validity = FailingParser("").check_valid("anything");

        assert!(!validity.valid);
        assert_eq!(validity.error, "Unknown error");
    }

    #[test]
    fn enclosing_context_propagates_parse_failures() {
        let range = LineRange::new(1, 1).unwrap();

        let err = FailingParser("boom").enclosing_context("x", range).unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn handle_reuses_parser_across_calls() {
        let handle = python();

        let first = handle.parse("a = 1\n").expect("first parse");
        let second = handle.parse("b = 2\nc = 3\n").expect("second parse");

        assert_eq!(first.root_node().named_child_count(), 1);
        assert_eq!(second.root_node().named_child_count(), 2);
    }

    #[test]
    fn handle_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParserHandle>();
    }

    #[test]
    fn debug_output_names_language() {
        let debug = format!("{:?}", python());

        assert!(debug.contains("Python"));
    }

    #[tokio::test]
    async fn async_factory_builds_a_working_handle() {
        let handle = ParserHandle::initialize(Language::Rust, ParseOptions::default())
            .await
            .expect("rust grammar should load");

        assert_eq!(handle.language(), Language::Rust);
        assert!(handle.check_valid("fn main() {}\n").valid);
    }
}
