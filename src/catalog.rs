//! Message-catalog location and loading

use crate::error::CatalogUnavailable;
use crate::locale::LocaleSelection;
use gettext::Catalog;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory searched for catalogs when none is configured, relative to the
/// process working directory.
pub const DEFAULT_RES_DIR: &str = "res";

/// Locates and loads compiled message catalogs.
///
/// Catalogs live in a single resource directory as per-language files named
/// `messages_<xx>.mo`, where `<xx>` is a selection's two-letter language
/// tag. Parsing of the binary catalog format is owned entirely by the
/// [`gettext`] crate; this store only finds and opens the file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    res_dir: PathBuf,
}

impl CatalogStore {
    /// Create a store reading catalogs from the given directory
    pub fn new<P: AsRef<Path>>(res_dir: P) -> Self {
        Self {
            res_dir: res_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory this store reads catalogs from
    pub fn res_dir(&self) -> &Path {
        &self.res_dir
    }

    /// The file a catalog for `selection` is expected at
    pub fn catalog_path(&self, selection: &LocaleSelection) -> PathBuf {
        self.res_dir.join(selection.catalog_file_name())
    }

    /// Open the catalog file for `selection` for binary read and parse it.
    ///
    /// `Ok` carries the loaded catalog. `Err` is [`CatalogUnavailable`],
    /// the one recognized failure kind; deciding what stands in for the
    /// missing catalog is deliberately left to the caller.
    pub fn load(&self, selection: &LocaleSelection) -> Result<Catalog, CatalogUnavailable> {
        let path = self.catalog_path(selection);
        debug!("Opening message file {} for locale {}", path.display(), selection);

        let file = File::open(&path).map_err(|source| CatalogUnavailable::Unreadable {
            path: path.clone(),
            source,
        })?;

        Catalog::parse(file).map_err(|source| CatalogUnavailable::Malformed { path, source })
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_RES_DIR)
    }
}
