//! Shared fixtures for the integration tests
//!
//! Builds minimal compiled message catalogs on disk and serializes access
//! to process-global state (locale environment variables, the installed
//! translator, the working directory).

#![allow(dead_code)] // compiled once per test binary; not all of them use every helper

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Header entry carried by every fixture catalog: UTF-8 text with the
/// common two-form plural rule.
const METADATA: &str =
    "Content-Type: text/plain; charset=UTF-8\nPlural-Forms: nplurals=2; plural=(n != 1);\n";

/// Builds little-endian compiled catalogs entry by entry.
///
/// Only what the tests need: plain messages, two-form plurals, and
/// context-disambiguated messages, always with a metadata header.
pub struct MoBuilder {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl MoBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![(Vec::new(), METADATA.as_bytes().to_vec())],
        }
    }

    /// Add a plain entry
    pub fn msg(mut self, id: &str, translated: &str) -> Self {
        self.entries
            .push((id.as_bytes().to_vec(), translated.as_bytes().to_vec()));
        self
    }

    /// Add an entry with plural forms; `translated` lists the forms in
    /// order
    pub fn plural(mut self, id: &str, plural_id: &str, translated: &[&str]) -> Self {
        let key = format!("{id}\u{0}{plural_id}");
        let value = translated.join("\u{0}");
        self.entries.push((key.into_bytes(), value.into_bytes()));
        self
    }

    /// Add an entry disambiguated by a context string
    pub fn ctx_msg(mut self, context: &str, id: &str, translated: &str) -> Self {
        let key = format!("{context}\u{4}{id}");
        self.entries
            .push((key.into_bytes(), translated.as_bytes().to_vec()));
        self
    }

    /// Serialize in the compiled-catalog layout: 28-byte header, the two
    /// length/offset tables (originals sorted bytewise), then the
    /// NUL-terminated string data. No hash table.
    pub fn bytes(&self) -> Vec<u8> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let count = entries.len() as u32;
        let originals_table = 28u32;
        let translations_table = originals_table + 8 * count;
        let data_start = translations_table + 8 * count;

        let mut tables: Vec<u8> = Vec::new();
        let mut data: Vec<u8> = Vec::new();
        for (key, _) in &entries {
            tables.extend_from_slice(&(key.len() as u32).to_le_bytes());
            tables.extend_from_slice(&(data_start + data.len() as u32).to_le_bytes());
            data.extend_from_slice(key);
            data.push(0);
        }
        for (_, value) in &entries {
            tables.extend_from_slice(&(value.len() as u32).to_le_bytes());
            tables.extend_from_slice(&(data_start + data.len() as u32).to_le_bytes());
            data.extend_from_slice(value);
            data.push(0);
        }

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(&0x9504_12de_u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&originals_table.to_le_bytes());
        out.extend_from_slice(&translations_table.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&data_start.to_le_bytes());
        out.extend_from_slice(&tables);
        out.extend_from_slice(&data);
        out
    }

    pub fn write_to(&self, path: &Path) {
        fs::write(path, self.bytes()).expect("failed to write catalog fixture");
    }
}

static GLOBAL_STATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn global_state_lock() -> MutexGuard<'static, ()> {
    GLOBAL_STATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scoped locale environment: clears every locale variable, applies the
/// given ones, and restores the previous values on drop. Holds the global
/// test lock for its lifetime, so tests touching the environment or the
/// installed translator cannot interleave.
pub struct LocaleEnv {
    _lock: MutexGuard<'static, ()>,
    saved: Vec<(&'static str, Option<String>)>,
}

impl LocaleEnv {
    pub fn with(vars: &[(&'static str, &str)]) -> Self {
        let lock = global_state_lock();

        let saved = lingo::LOCALE_ENV_VARS
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();
        for name in lingo::LOCALE_ENV_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        Self { _lock: lock, saved }
    }

    /// Only `LANG` set, to the given locale
    pub fn lang(locale: &str) -> Self {
        Self::with(&[("LANG", locale)])
    }

    /// No locale configured at all
    pub fn none() -> Self {
        Self::with(&[])
    }
}

impl Drop for LocaleEnv {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

/// Scoped working directory, for exercising the default `res/` lookup.
/// Take a [`LocaleEnv`] first; the working directory is process state too.
pub struct WorkDir {
    previous: PathBuf,
}

impl WorkDir {
    pub fn enter(path: &Path) -> Self {
        let previous = env::current_dir().expect("no working directory");
        env::set_current_dir(path).expect("failed to enter working directory");
        Self { previous }
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
