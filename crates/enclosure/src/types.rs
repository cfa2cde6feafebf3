//! Domain types for enclosing-context lookups.
//!
//! - **Requests**: `LineRange` (what the caller asks about)
//! - **Results**: `NodeSummary` (owned description of a located node), `Validity`
//! - **Selectors**: `Language` (which grammar the caller wants)
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Language | Enum not String | Adding a grammar requires a `LanguageSupport` impl |
//! | `LineRange` | Private fields | Only `LineRange::new` can build one, so it is always ordered |
//! | Lines | 1-based | Matches diff hunks and editor line numbers; tree rows stay 0-based |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// Enums
// ============================================================================

/// Languages with a bundled tree-sitter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python source files (`.py`, `.pyi`)
    Python,
    /// Rust source files (`.rs`)
    Rust,
    /// C# source files (`.cs`)
    CSharp,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 3] = [Self::Python, Self::Rust, Self::CSharp];

    /// File extensions handled by this language.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Python => &["py", "pyi"],
            Self::Rust => &["rs"],
            Self::CSharp => &["cs"],
        }
    }

    /// Detect language from file extension.
    ///
    /// # Returns
    ///
    /// `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Detect language from a file path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Stable lowercase name, as used in config files and `--language`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Rust => "rust",
            Self::CSharp => "csharp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "rust" | "rs" => Ok(Self::Rust),
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            other => Err(Error::Config(format!(
                "unknown language '{other}'. Valid languages: python, rust, csharp"
            ))),
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// A 1-based, inclusive range of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    line_start: usize,
    line_end: usize,
}

impl LineRange {
    /// Create a validated line range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `line_start` is 0 or comes after `line_end`.
    pub fn new(line_start: usize, line_end: usize) -> Result<Self> {
        if line_start == 0 {
            return Err(Error::InvalidInput(
                "line numbers are 1-based; line_start must be at least 1".to_string(),
            ));
        }
        if line_start > line_end {
            return Err(Error::InvalidInput(format!(
                "line_start {line_start} is after line_end {line_end}"
            )));
        }
        Ok(Self {
            line_start,
            line_end,
        })
    }

    /// A range covering exactly one line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `line` is 0.
    pub fn single(line: usize) -> Result<Self> {
        Self::new(line, line)
    }

    /// First line of the range (1-based).
    #[must_use]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Last line of the range (1-based, inclusive).
    #[must_use]
    pub fn line_end(&self) -> usize {
        self.line_end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line_start == self.line_end {
            write!(f, "{}", self.line_start)
        } else {
            write!(f, "{}-{}", self.line_start, self.line_end)
        }
    }
}

/// Parses `"START:END"`, `"START-END"` or a single `"LINE"`.
impl FromStr for LineRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse_line = |part: &str| {
            part.trim().parse::<usize>().map_err(|_| {
                Error::InvalidInput(format!(
                    "invalid line number '{part}' in range '{s}'. Expected START:END or LINE"
                ))
            })
        };

        match s.split_once([':', '-']) {
            Some((start, end)) => Self::new(parse_line(start)?, parse_line(end)?),
            None => Self::single(parse_line(s)?),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Location span in source code (1-indexed lines and columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Starting line (1-indexed)
    pub start_line: u32,
    /// Starting column (1-indexed)
    pub start_column: u32,
    /// Ending line (1-indexed, inclusive)
    pub end_line: u32,
    /// Ending column (1-indexed, exclusive)
    pub end_column: u32,
}

impl Span {
    /// Create a new span with validation.
    ///
    /// Returns `None` if the end position is before the start position.
    #[must_use]
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Option<Self> {
        if end_line < start_line || (end_line == start_line && end_column < start_column) {
            return None;
        }
        Some(Self {
            start_line,
            start_column,
            end_line,
            end_column,
        })
    }
}

/// Owned description of an enclosing node, detached from the syntax tree.
///
/// Produced by [`SourceParser::enclosing_context`](crate::SourceParser::enclosing_context)
/// and printed by the CLI's `--json` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    /// Grammar node kind (e.g. `function_definition`, `class_declaration`)
    pub kind: String,
    /// Scope category a reader would use ("function", "class"), if the kind is one
    pub label: Option<String>,
    /// Text of the node's `name` field, when the grammar gives it one
    pub name: Option<String>,
    /// Where the node sits in the source
    pub span: Span,
    /// Row delta used to rank candidates (`end_row - start_row`)
    pub size: usize,
    /// Number of direct children
    pub child_count: usize,
    /// Source text covered by the node
    pub text: String,
}

/// Outcome of a dry-run parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// `true` when the parse call produced a tree
    pub valid: bool,
    /// Empty when valid; otherwise the failure message
    pub error: String,
}

impl Validity {
    /// Message used when a parse failure carries no text of its own.
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";

    /// A successful dry run.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: String::new(),
        }
    }

    /// A failed dry run. Blank messages become [`Self::UNKNOWN_ERROR`].
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            Self::UNKNOWN_ERROR.to_string()
        } else {
            message
        };
        Self {
            valid: false,
            error,
        }
    }
}
