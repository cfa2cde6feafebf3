//! Configuration file support.
//!
//! An optional YAML file tunes how files are parsed:
//!
//! ```yaml
//! parse-timeout-micros: 2000000
//! extensions:
//!   pyw: python
//!   csx: csharp
//! ```
//!
//! Every key is optional; a missing file section means the built-in default.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::ParseOptions;
use crate::types::Language;

/// Conventional configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".enclosure.yaml";

/// Configuration file structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Abandon parses that take longer than this (microseconds)
    #[serde(rename = "parse-timeout-micros")]
    pub parse_timeout_micros: Option<u64>,

    /// Extra file extensions mapped to a language, checked before the built-ins
    pub extensions: BTreeMap<String, Language>,
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration YAML.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, else [`CONFIG_FILE_NAME`] in `dir` if present,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// An explicitly requested file must exist and parse; a conventional file
    /// that exists must parse.
    pub async fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path).await;
        }

        let conventional = dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&conventional).await? {
            Self::load(&conventional).await
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse options derived from this configuration.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            timeout_micros: self.parse_timeout_micros,
        }
    }

    /// Language for `path`: configured extensions first, then the built-ins.
    #[must_use]
    pub fn language_for_path(&self, path: &Path) -> Option<Language> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        self.extensions
            .get(&ext.to_lowercase())
            .copied()
            .or_else(|| Language::from_extension(ext))
    }

    fn validate(&self) -> Result<()> {
        if self.parse_timeout_micros == Some(0) {
            return Err(Error::Config(
                "parse-timeout-micros must be greater than 0; omit it to disable the timeout"
                    .to_string(),
            ));
        }

        if let Some(ext) = self
            .extensions
            .keys()
            .find(|ext| ext.is_empty() || ext.starts_with('.') || *ext != &ext.to_lowercase())
        {
            return Err(Error::Config(format!(
                "extension '{ext}' must be lowercase and given without a leading dot"
            )));
        }

        Ok(())
    }
}
