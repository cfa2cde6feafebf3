//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use enclosure::{Error, Language, LineRange};

/// Parse a line range such as `12:15`, `12-15` or `12`.
pub fn parse_line_range(s: &str) -> Result<LineRange, String> {
    s.parse::<LineRange>().map_err(|e| strip_category(&e))
}

/// Parse a language name such as `python`, `rust` or `csharp`.
pub fn parse_language(s: &str) -> Result<Language, String> {
    s.parse::<Language>().map_err(|e| strip_category(&e))
}

/// Clap prefixes its own "invalid value" text, so drop ours.
fn strip_category(error: &Error) -> String {
    match error {
        Error::InvalidInput(message) | Error::Config(message) => message.clone(),
        other => other.to_string(),
    }
}
