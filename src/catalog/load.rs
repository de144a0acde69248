use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::Catalog;
use super::model::{Artist, Track};
use crate::error::{Error, Result};

/// On-disk catalog layout: `[[songs]]` and `[[artists]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    songs: Vec<Track>,
    #[serde(default)]
    artists: Vec<Artist>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    ///
    /// Song ids must be unique within a file; duplicates would make queue
    /// navigation ambiguous.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(s)?;

        let mut seen = HashSet::new();
        for song in &file.songs {
            if !seen.insert(song.id.as_str()) {
                return Err(Error::DuplicateTrackId(song.id.clone()));
            }
        }

        Ok(Self {
            songs: file.songs,
            artists: file.artists,
        })
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&text)?;
        log::info!(
            "loaded catalog from {}: {} songs, {} artists",
            path.display(),
            catalog.songs.len(),
            catalog.artists.len()
        );
        Ok(catalog)
    }
}
