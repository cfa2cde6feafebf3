//! # Enclosure: enclosing context for line ranges
//!
//! Enclosure answers "what is this change inside of?" for a line-based edit.
//! Given source text and a 1-based inclusive line range, it parses the text
//! with a bundled tree-sitter grammar and reports the syntax node that spans
//! the whole range.
//!
//! ## Design Philosophy
//!
//! - **Parser-agnostic core** - the search runs over any [`SyntaxTree`], whether a
//!   live tree-sitter tree or an [`OutlineTree`] built elsewhere
//! - **Caller-owned state** - no global parser; applications hold a
//!   [`ParserHandle`] or a [`ParserRegistry`]
//! - **Absence is an answer** - a range nothing spans yields an empty result, not an error
//! - **Explicit grammar selection** - the caller picks the [`Language`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use enclosure::{Language, LineRange, ParserRegistry, SourceParser};
//!
//! # async fn run() -> enclosure::Result<()> {
//! let registry = ParserRegistry::default();
//! let python = registry.handle(Language::Python).await?;
//!
//! let source = "class Greeter:\n    def greet(self):\n        return 'hi'\n";
//! if let Some(context) = python.enclosing_context(source, LineRange::new(2, 3)?)? {
//!     println!("inside {} (lines {}-{})", context.kind, context.span.start_line, context.span.end_line);
//! }
//!
//! let validity = python.check_valid(source);
//! assert!(validity.valid);
//! # Ok(())
//! # }
//! ```
//!
//! Working on the tree directly keeps the node borrowed from it:
//!
//! ```no_run
//! use enclosure::{find_enclosing_context, Language, LineRange, ParseOptions, ParserHandle, SourceParser, SyntaxNode};
//!
//! let handle = ParserHandle::new(Language::Rust, ParseOptions::default())?;
//! let tree = handle.parse("fn main() {\n    println!(\"hi\");\n}\n")?;
//!
//! let context = find_enclosing_context(&tree, LineRange::single(2)?)?;
//! if let Some(node) = context.node() {
//!     println!("{} spans lines {}-{}", node.kind(), node.start_line(), node.end_line());
//! }
//! # Ok::<(), enclosure::Error>(())
//! ```

mod config;
mod error;
mod finder;
mod languages;
mod outline;
mod parser;
mod registry;
mod types;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result};
pub use finder::{EnclosingContext, SyntaxNode, SyntaxTree, find_enclosing_context};
pub use languages::{LanguageSupport, get_language_support};
pub use outline::{OutlineNode, OutlineTree, Position};
pub use parser::{ParseOptions, ParserHandle, SourceParser};
pub use registry::ParserRegistry;
pub use types::{Language, LineRange, NodeSummary, Span, Validity};
