//! The document store itself: open, migrate, persist.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{info, warn};

use investfolio_core::errors::{Error, Result};

use crate::document::{LegacyHolding, StoreDocument, LEGACY_FILE, SCHEMA_VERSION, STORE_FILE};
use crate::migration::upgrade_legacy;

/// A versioned JSON document on disk holding portfolios and holdings.
///
/// The whole document lives in memory behind an `RwLock`; every
/// mutation rewrites the file. At personal-portfolio scale that is
/// plenty.
pub struct LocalStore {
    path: PathBuf,
    doc: RwLock<StoreDocument>,
}

impl LocalStore {
    /// Opens the store under `data_dir`, creating the directory when
    /// needed and upgrading a legacy single-portfolio file when found.
    ///
    /// A corrupt or unreadable document starts the store empty with a
    /// warning; the next successful mutation rewrites it.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORE_FILE);

        let doc = if path.exists() {
            Self::load_current(&path)
        } else {
            match Self::load_legacy(&data_dir.join(LEGACY_FILE)) {
                Some(legacy) => {
                    let upgraded = upgrade_legacy(legacy);
                    info!(
                        "Upgraded legacy store: {} holdings moved into '{}'",
                        upgraded.holdings.len(),
                        upgraded.portfolios[0].name
                    );
                    // Persist right away so the upgrade happens once.
                    // The legacy file stays in place.
                    Self::write_document(&path, &upgraded)?;
                    upgraded
                }
                None => StoreDocument::empty(),
            }
        };

        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    fn load_current(path: &Path) -> StoreDocument {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Could not read {}: {}; starting empty", path.display(), err);
                return StoreDocument::empty();
            }
        };
        match serde_json::from_slice::<StoreDocument>(&raw) {
            Ok(doc) if doc.version == SCHEMA_VERSION => doc,
            Ok(doc) => {
                warn!(
                    "Unsupported store version {} in {}; starting empty",
                    doc.version,
                    path.display()
                );
                StoreDocument::empty()
            }
            Err(err) => {
                warn!(
                    "Corrupt store document {}: {}; starting empty",
                    path.display(),
                    err
                );
                StoreDocument::empty()
            }
        }
    }

    /// Reads the legacy flat holdings list, if one exists and parses.
    fn load_legacy(path: &Path) -> Option<Vec<LegacyHolding>> {
        if !path.exists() {
            return None;
        }
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Could not read legacy {}: {}", path.display(), err);
                return None;
            }
        };
        match serde_json::from_slice::<Vec<LegacyHolding>>(&raw) {
            Ok(holdings) => Some(holdings),
            Err(err) => {
                warn!("Corrupt legacy store {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Atomic write: serialize to a sibling temp file, then rename.
    fn write_document(path: &Path, doc: &StoreDocument) -> Result<()> {
        let json = serde_json::to_vec_pretty(doc)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Runs a read-only closure against the document.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&StoreDocument) -> R) -> Result<R> {
        let doc = self
            .doc
            .read()
            .map_err(|e| Error::Repository(format!("store lock poisoned: {}", e)))?;
        Ok(f(&doc))
    }

    /// Applies a mutation and persists the result.
    ///
    /// The closure works on a copy; the in-memory document is only
    /// replaced once the new version is safely on disk, so a failed
    /// write leaves memory and file agreeing.
    pub(crate) fn mutate<R>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> Result<R>,
    ) -> Result<R> {
        let mut doc = self
            .doc
            .write()
            .map_err(|e| Error::Repository(format!("store lock poisoned: {}", e)))?;
        let mut next = doc.clone();
        let out = f(&mut next)?;
        Self::write_document(&self.path, &next)?;
        *doc = next;
        Ok(out)
    }
}
