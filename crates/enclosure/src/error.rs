//! Error types for enclosure operations.
//!
//! The categories follow what a caller can do about them:
//!
//! - **`Initialization`**: the grammar could not be bound to a parser. Fatal
//!   for that language; the registry remembers the failure and never retries.
//! - **`InvalidInput`**: the request itself is nonsensical (an inverted line
//!   range, a tree with no root, a handle requested before initialization).
//! - **`Parse`**: tree-sitter gave up on the text. `check_valid` folds this
//!   into a [`Validity`](crate::Validity) instead of propagating it.
//! - **`Internal`**: something went wrong in enclosure itself, such as
//!   rendering output.
//!
//! Finding no enclosing node is *not* an error; it is an empty
//! [`EnclosingContext`](crate::EnclosingContext).

use thiserror::Error;

/// Result type for enclosure operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for enclosure operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The parser or its grammar failed to load
    #[error("failed to initialize parser: {0}")]
    Initialization(String),

    /// The request was rejected before any work was done
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The parse call itself failed (as opposed to returning a tree with error nodes)
    #[error("parse failed: {0}")]
    Parse(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// A bug or unexpected state inside enclosure itself
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns `true` if the caller can fix this by changing the request.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Config(_))
    }
}
