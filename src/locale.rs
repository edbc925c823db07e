//! Locale detection and language-tag derivation

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fmt;
use tracing::debug;

/// Environment variables consulted for the locale, in GNU/POSIX
/// message-resolution precedence. The first one that is set and non-empty
/// decides the selection.
pub const LOCALE_ENV_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// The locale the operating environment selected, together with the
/// two-letter language tag derived from it.
///
/// The tag is always exactly two ASCII lowercase letters taken from the
/// identifier's language component (`fr_FR.UTF-8` → `fr`), which is what
/// names the catalog file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleSelection {
    identifier: String,
    language: String,
}

impl LocaleSelection {
    /// Read the environment's locale configuration and derive a selection
    /// from it.
    ///
    /// Returns `None` when no locale variable is set, or when the value is
    /// `C`, `POSIX`, or otherwise not shaped like a locale identifier; the
    /// caller then falls back to untranslated messages.
    pub fn from_environment() -> Option<Self> {
        for name in LOCALE_ENV_VARS {
            let value = match env::var(name) {
                Ok(value) if !value.trim().is_empty() => value,
                _ => continue,
            };

            // LANGUAGE may hold a colon-separated priority list; the other
            // variables hold a single identifier, which splits to itself.
            let token = value.split(':').map(str::trim).find(|token| !token.is_empty());
            let selection = token.and_then(Self::parse);
            if let Some(selection) = &selection {
                debug!("Using locale {} from {}", selection, name);
            }
            return selection;
        }

        None
    }

    /// Parse a locale identifier into a selection.
    ///
    /// Accepts POSIX (`fr_FR.UTF-8@euro`) and BCP-47-style (`fr-FR`)
    /// identifiers. Returns `None` for `C`, `POSIX`, and anything whose
    /// language component does not start with two ASCII letters.
    pub fn parse(identifier: &str) -> Option<Self> {
        let identifier = identifier.trim();
        if identifier.is_empty() || identifier == "C" || identifier == "POSIX" {
            return None;
        }

        // Strip the encoding (".UTF-8") and modifier ("@euro") suffixes,
        // then isolate the language component of what remains.
        let base = identifier.split(['.', '@']).next()?;
        let language_component = base.split(['_', '-']).next()?;
        if language_component.len() < 2
            || !language_component.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let language: String = language_component
            .chars()
            .take(2)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Some(Self {
            identifier: identifier.to_string(),
            language,
        })
    }

    /// The full identifier as found in the environment, e.g. `fr_FR.UTF-8`
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The derived two-letter language tag, e.g. `fr`
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The catalog file name for this selection, e.g. `messages_fr.mo`
    pub fn catalog_file_name(&self) -> String {
        format!("messages_{}.mo", self.language)
    }
}

impl fmt::Display for LocaleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

// Serialized as the bare identifier string; deserializing re-derives the
// language tag so a stored selection can never carry a stale or forged tag.

impl Serialize for LocaleSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.identifier)
    }
}

impl<'de> Deserialize<'de> for LocaleSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid locale identifier {raw:?}")))
    }
}
