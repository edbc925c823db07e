//! The process-wide installed translator
//!
//! After initialization, code anywhere in the process resolves translation
//! lookups through the installed provider without holding a reference to
//! it. Before anything is installed the provider is the pass-through
//! translator, so lookups are always safe.

use crate::translator::Translator;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

static INSTALLED: Lazy<ArcSwap<Translator>> =
    Lazy::new(|| ArcSwap::from_pointee(Translator::PassThrough));

/// Install `translator` as the process-wide provider, replacing whatever
/// was installed before.
///
/// Concurrent installs are not coordinated beyond the atomic swap: the
/// last writer wins, and a reader mid-transition observes either the old
/// or the new translator. Returns the installed handle so callers can
/// also thread the provider through explicitly.
pub fn install(translator: Translator) -> Arc<Translator> {
    let handle = Arc::new(translator);
    INSTALLED.store(Arc::clone(&handle));
    debug!("Installed {:?} as the process translator", handle);
    handle
}

/// The currently installed provider
pub fn installed() -> Arc<Translator> {
    INSTALLED.load_full()
}

/// Translate `msg` through the installed provider
pub fn tr(msg: &str) -> String {
    INSTALLED.load().translate(msg).to_string()
}

/// Translate a plural message through the installed provider, selecting
/// the form for `n`
pub fn ntr(singular: &str, plural: &str, n: u64) -> String {
    INSTALLED
        .load()
        .translate_plural(singular, plural, n)
        .to_string()
}
