//! `enclosure check` command implementation.

use std::path::Path;

use enclosure::{Language, SourceParser};

use super::display::print_validity;
use super::load_source;

/// Run the check command.
///
/// Returns whether the file parsed, so the caller can set the exit code.
pub async fn run(
    file: &Path,
    language: Option<Language>,
    config: Option<&Path>,
    json: bool,
) -> Result<bool, enclosure::Error> {
    let source = load_source(file, language, config).await?;

    let validity = source.parser.check_valid(&source.text);

    if json {
        let rendered = serde_json::to_string_pretty(&validity)
            .map_err(|e| enclosure::Error::Internal(format!("failed to render JSON: {e}")))?;
        println!("{rendered}");
    } else {
        print_validity(&source.path, source.parser.language(), &validity);
    }

    Ok(validity.valid)
}
