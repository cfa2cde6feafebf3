//! `enclosure find` command implementation.

use std::path::Path;

use enclosure::{Language, LineRange, SourceParser};

use super::display::print_context;
use super::load_source;

/// Run the find command.
pub async fn run(
    file: &Path,
    range: LineRange,
    language: Option<Language>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), enclosure::Error> {
    let source = load_source(file, language, config).await?;

    let context = source.parser.enclosing_context(&source.text, range)?;

    if json {
        let rendered = serde_json::to_string_pretty(&context)
            .map_err(|e| enclosure::Error::Internal(format!("failed to render JSON: {e}")))?;
        println!("{rendered}");
    } else {
        print_context(&source.path, range, context.as_ref());
    }

    Ok(())
}
