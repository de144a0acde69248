//! Catalog module: the songs and artists the player is fed from.
//!
//! A `Catalog` is either the built-in demo data or a TOML file. Browse
//! helpers, display formatting and upload validation live alongside it.

pub mod browse;
pub mod format;
mod load;
pub mod mock;
mod model;
pub mod upload;

pub use model::*;

use crate::error::{Error, Result};

/// In-memory song and artist lists, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub songs: Vec<Track>,
    pub artists: Vec<Artist>,
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Self {
            songs: mock::songs(),
            artists: mock::artists(),
        }
    }

    /// Look up a song by id.
    pub fn find_song(&self, id: &str) -> Result<&Track> {
        self.songs
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::TrackNotFound(id.to_string()))
    }

    /// Genres a song can be tagged with (the `"All"` sentinel excluded).
    pub fn song_genres() -> impl Iterator<Item = &'static str> {
        mock::GENRES
            .iter()
            .copied()
            .filter(|g| *g != mock::ALL_GENRES)
    }
}
