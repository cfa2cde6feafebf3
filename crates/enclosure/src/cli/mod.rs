//! CLI command implementations.

mod display;

pub mod check;
pub mod find;
pub mod validators;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use enclosure::{Config, Error, Language, ParserHandle, ParserRegistry};
use tracing::debug;

/// A source file read from disk, with the parser chosen for it.
pub struct LoadedSource {
    /// Path as given on the command line
    pub path: PathBuf,
    /// File contents
    pub text: String,
    /// Parser for the file's language
    pub parser: Arc<ParserHandle>,
}

/// Read `file` and pick its parser.
///
/// The language is `language` when given, else the configured extension
/// mapping, else the built-in extension mapping.
pub async fn load_source(
    file: &Path,
    language: Option<Language>,
    config_path: Option<&Path>,
) -> Result<LoadedSource, Error> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(config_path, &cwd).await?;

    let language = match language.or_else(|| config.language_for_path(file)) {
        Some(lang) => lang,
        None => {
            return Err(Error::Config(format!(
                "cannot tell the language of '{}'. Pass --language (python, rust, csharp) or map its extension in {}",
                file.display(),
                enclosure::CONFIG_FILE_NAME
            )));
        }
    };
    debug!(file = %file.display(), %language, "Selected grammar");

    let text = tokio::fs::read_to_string(file).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", file.display()),
        ))
    })?;

    let registry = ParserRegistry::new(config.parse_options());
    let parser = registry.handle(language).await?;

    Ok(LoadedSource {
        path: file.to_path_buf(),
        text,
        parser,
    })
}
