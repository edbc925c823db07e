//! Error types for catalog loading

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The one failure kind this library recognizes: a message catalog that
/// cannot be used, either because its file cannot be read or because its
/// contents are not a valid compiled catalog.
///
/// Initialization never surfaces this error to callers; it is absorbed by
/// the selection step, which substitutes the pass-through translator. It is
/// public so that code driving [`CatalogStore::load`](crate::CatalogStore::load)
/// directly can decide the fallback itself.
#[derive(Error, Debug)]
pub enum CatalogUnavailable {
    /// The catalog file is missing or could not be opened for reading
    #[error("cannot read message catalog {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file exists but is not a well-formed compiled catalog
    #[error("cannot parse message catalog {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: gettext::Error,
    },
}

impl CatalogUnavailable {
    /// The catalog file this error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}
