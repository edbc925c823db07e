//! Localization orchestration
//!
//! Ties the pieces together the way an application wants them at startup:
//! detect the environment's locale, load the matching catalog, substitute
//! the pass-through translator when no catalog is usable, and install the
//! result as the process-wide provider.

use crate::catalog::CatalogStore;
use crate::global;
use crate::locale::LocaleSelection;
use crate::translator::Translator;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates locale detection, catalog loading, and installation.
///
/// Calling code that prefers dependency injection over process-wide state
/// can hold a `Localizer` (or the [`Translator`] it selects) and thread it
/// through explicitly; [`install`](Localizer::install) and [`init`] remain
/// the thin process-wide layer on top.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    store: CatalogStore,
}

impl Localizer {
    /// A localizer reading catalogs from `res_dir`
    pub fn new<P: AsRef<Path>>(res_dir: P) -> Self {
        Self {
            store: CatalogStore::new(res_dir),
        }
    }

    /// A localizer over an existing store
    pub fn with_store(store: CatalogStore) -> Self {
        Self { store }
    }

    /// The store this localizer loads catalogs from
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Select the translator for an explicit locale selection.
    ///
    /// This is where the fallback is decided: a loaded catalog becomes the
    /// active translator, and an unavailable one is replaced by the
    /// pass-through translator. Never fails.
    pub fn select_for(&self, selection: &LocaleSelection) -> Translator {
        match self.store.load(selection) {
            Ok(catalog) => Translator::Catalog(catalog),
            Err(err) => {
                debug!("Locale not found ({}); using default messages", err);
                Translator::PassThrough
            }
        }
    }

    /// Select the translator for the environment's locale.
    ///
    /// An environment without a usable locale selects the pass-through
    /// translator directly.
    pub fn select(&self) -> Translator {
        match LocaleSelection::from_environment() {
            Some(selection) => self.select_for(&selection),
            None => {
                debug!("No locale configured in environment; using default messages");
                Translator::PassThrough
            }
        }
    }

    /// Select the environment's translator and install it as the
    /// process-wide provider, returning the installed handle.
    pub fn install(&self) -> Arc<Translator> {
        global::install(self.select())
    }
}

/// Initialize localization for the process.
///
/// Detects the environment's locale, loads `res/messages_<xx>.mo` if
/// present, falls back to the pass-through translator otherwise, and
/// installs the result as the process-wide provider. Call this before the
/// first translated string is requested. Calling it again repeats the
/// detection-and-load sequence and reinstalls a possibly different
/// translator. Never fails.
pub fn init() -> Arc<Translator> {
    Localizer::default().install()
}
