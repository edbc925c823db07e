//! Localization bootstrap for applications using compiled message catalogs
//!
//! This crate initializes translation support the way a program wants it at
//! startup. It includes:
//!
//! - Locale detection from the environment (`LANGUAGE`, `LC_ALL`,
//!   `LC_MESSAGES`, `LANG`)
//! - Loading of per-language compiled catalogs (`res/messages_<xx>.mo`)
//! - A pass-through translator substituted whenever no catalog is usable
//! - A process-wide installed provider, plus explicit handles for code
//!   that prefers dependency injection
//!
//! Catalog lookup itself is owned by the [`gettext`] crate; this crate only
//! selects, loads, and installs the translator.
//!
//! # Example
//!
//! ```
//! // At startup: pick a translator for the current environment.
//! let translator = lingo::init();
//!
//! // Anywhere in the process afterwards:
//! println!("{}", lingo::tr("Hello"));
//!
//! // Or thread the handle through explicitly instead:
//! println!("{}", translator.translate("Hello"));
//! ```

pub mod catalog;
pub mod error;
pub mod global;
pub mod locale;
pub mod manager;
pub mod translator;

pub use catalog::{CatalogStore, DEFAULT_RES_DIR};
pub use error::CatalogUnavailable;
pub use global::{install, installed, ntr, tr};
pub use locale::{LocaleSelection, LOCALE_ENV_VARS};
pub use manager::{init, Localizer};
pub use translator::Translator;

// Re-export the external catalog type for callers that hold one directly
pub use gettext::Catalog;
