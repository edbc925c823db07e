//! Translator handles: a loaded catalog or the pass-through identity

use gettext::Catalog;
use std::fmt;

/// A translation provider: either a message catalog loaded from disk or the
/// pass-through translator, which returns every input string unchanged.
///
/// Lookup semantics for the catalog arm are owned by the [`gettext`] crate;
/// the pass-through arm mirrors that facility's null-translator behavior so
/// the two are interchangeable at call sites.
pub enum Translator {
    /// Lookups resolve through a loaded compiled catalog
    Catalog(Catalog),
    /// Lookups return their input unchanged
    PassThrough,
}

impl Translator {
    /// Whether this is the pass-through translator
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// Translate a message, returning it unchanged when no catalog is
    /// loaded or the catalog has no entry for it.
    pub fn translate<'a>(&'a self, msg: &'a str) -> &'a str {
        match self {
            Self::Catalog(catalog) => catalog.gettext(msg),
            Self::PassThrough => msg,
        }
    }

    /// Translate a message with plural forms, selecting the form for `n`.
    ///
    /// Without a catalog this keeps the null-translator convention: the
    /// singular for a count of one, the plural for everything else.
    pub fn translate_plural<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        match self {
            Self::Catalog(catalog) => catalog.ngettext(singular, plural, n),
            Self::PassThrough => {
                if n == 1 {
                    singular
                } else {
                    plural
                }
            }
        }
    }

    /// Translate a message that is disambiguated by a context string
    pub fn translate_with_context<'a>(&'a self, context: &'a str, msg: &'a str) -> &'a str {
        match self {
            Self::Catalog(catalog) => catalog.pgettext(context, msg),
            Self::PassThrough => msg,
        }
    }

    /// Translate a context-disambiguated message with plural forms
    pub fn translate_plural_with_context<'a>(
        &'a self,
        context: &'a str,
        singular: &'a str,
        plural: &'a str,
        n: u64,
    ) -> &'a str {
        match self {
            Self::Catalog(catalog) => catalog.npgettext(context, singular, plural, n),
            Self::PassThrough => {
                if n == 1 {
                    singular
                } else {
                    plural
                }
            }
        }
    }
}

impl Default for Translator {
    /// The safe default before any initialization has happened
    fn default() -> Self {
        Self::PassThrough
    }
}

impl From<Catalog> for Translator {
    fn from(catalog: Catalog) -> Self {
        Self::Catalog(catalog)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(_) => f.write_str("Translator::Catalog(..)"),
            Self::PassThrough => f.write_str("Translator::PassThrough"),
        }
    }
}
