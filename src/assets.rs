//! Tile image discovery
//!
//! Images are numbered `1.png` .. `N.png`; the number is the tile identity.
//! Decoding and scaling are up to the renderer, this only checks the files.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::settings::Settings;
use crate::sim::TileIdentity;

/// File extension of tile images
pub const ASSET_EXTENSION: &str = "png";

/// Located tile images, ordered by identity
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    pub dir: PathBuf,
    entries: Vec<(TileIdentity, PathBuf)>,
}

impl AssetCatalog {
    /// Find `1.png` .. `count.png` in `dir`; any missing or unreadable file fails
    pub fn scan(dir: &Path, count: u8) -> Result<Self> {
        if count == 0 {
            return Err(SetupError::config("asset count must be positive"));
        }

        let mut entries = Vec::with_capacity(count as usize);
        for identity in TileIdentity::numbered(count) {
            let path = dir.join(format!("{}.{}", identity.0, ASSET_EXTENSION));
            let readable = path.is_file() && File::open(&path).is_ok();
            if !readable {
                return Err(SetupError::config(format!(
                    "missing or unreadable tile image {}",
                    path.display()
                )));
            }
            entries.push((identity, path));
        }

        log::info!("Found {} tile images in {}", entries.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn identities(&self) -> Vec<TileIdentity> {
        self.entries.iter().map(|(identity, _)| *identity).collect()
    }

    pub fn path_for(&self, identity: TileIdentity) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(id, _)| *id == identity)
            .map(|(_, path)| path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tile identities for a session from the configured asset directory.
///
/// A missing directory is fatal unless `builtin_tiles` is set.
pub fn load_identities(settings: &Settings) -> Result<Vec<TileIdentity>> {
    if settings.asset_dir.is_dir() {
        let catalog = AssetCatalog::scan(&settings.asset_dir, settings.identity_count)?;
        return Ok(catalog.identities());
    }

    if settings.builtin_tiles {
        if settings.identity_count == 0 {
            return Err(SetupError::config("identity_count must be positive"));
        }
        log::warn!("Using {} built-in tile identities", settings.identity_count);
        return Ok(TileIdentity::numbered(settings.identity_count));
    }

    Err(SetupError::config(format!(
        "asset directory {} not found",
        settings.asset_dir.display()
    )))
}
