//! Lazily initialized parser handles, one per language.
//!
//! `ParserRegistry` replaces a process-wide parser singleton with a value the
//! application owns and passes around. Each language's handle is created on
//! first request; concurrent first requests wait on the same initialization
//! instead of racing it.
//!
//! Lifecycle per language: uninitialized → initialized (or failed) on the
//! first `handle()` call → kept for the registry's lifetime. A failed
//! initialization is remembered and returned to every later caller; it is
//! never retried.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::parser::{ParseOptions, ParserHandle};
use crate::types::Language;

/// Outcome of one language's initialization. Failures keep their message.
type Slot = OnceCell<std::result::Result<Arc<ParserHandle>, String>>;

/// Caller-owned set of parser handles.
#[derive(Debug)]
pub struct ParserRegistry {
    options: ParseOptions,
    slots: HashMap<Language, Slot>,
}

impl ParserRegistry {
    /// An empty registry whose handles will parse with `options`.
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            slots: Language::ALL
                .into_iter()
                .map(|lang| (lang, OnceCell::new()))
                .collect(),
        }
    }

    /// The handle for `language`, initializing it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Initialization`] if the grammar failed to load, now or
    /// on an earlier call.
    pub async fn handle(&self, language: Language) -> Result<Arc<ParserHandle>> {
        let options = self.options;
        self.handle_with(language, move || ParserHandle::initialize(language, options))
            .await
    }

    async fn handle_with<F, Fut>(&self, language: Language, init: F) -> Result<Arc<ParserHandle>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ParserHandle>>,
    {
        let slot = self.slot(language)?;

        let outcome = slot
            .get_or_init(|| async move {
                debug!(%language, "Initializing parser on first use");
                init().await.map(Arc::new).map_err(|e| {
                    error!(%language, error = %e, "Parser initialization failed");
                    match e {
                        Error::Initialization(message) => message,
                        other => other.to_string(),
                    }
                })
            })
            .await;

        outcome
            .clone()
            .map_err(Error::Initialization)
    }

    /// The handle for `language`, without initializing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `handle()` has not yet been called
    /// for this language, or [`Error::Initialization`] if that call failed.
    pub fn get(&self, language: Language) -> Result<Arc<ParserHandle>> {
        match self.slot(language)?.get() {
            Some(outcome) => outcome.clone().map_err(Error::Initialization),
            None => Err(Error::InvalidInput(format!(
                "{language} parser used before initialization"
            ))),
        }
    }

    fn slot(&self, language: Language) -> Result<&Slot> {
        self.slots.get(&language).ok_or_else(|| {
            Error::InvalidInput(format!("{language} has no slot in this registry"))
        })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
