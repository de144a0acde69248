use serde::{Deserialize, Serialize};

/// A playable song and its display metadata.
///
/// Tracks are supplied by the catalog and handed to the player by value;
/// the player never mutates them. Identity for queue navigation is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Length in whole seconds.
    pub duration: u32,
    #[serde(default)]
    pub plays: u64,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub isrc: Option<String>,
    #[serde(default)]
    pub audio_format: Option<String>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
}

impl Track {
    /// Build a track with the required fields; everything optional is empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            duration,
            plays: 0,
            explicit: false,
            cover_url: None,
            lyrics: None,
            description: None,
            release_date: None,
            isrc: None,
            audio_format: None,
            uploaded_by: None,
        }
    }

    /// Whether `other` refers to the same song (by id).
    pub fn same_id(&self, other: &Track) -> bool {
        self.id == other.id
    }
}

/// An artist entry. Display only; the player never looks at artists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub genre: String,
    #[serde(default)]
    pub song_count: u32,
    #[serde(default)]
    pub total_plays: u64,
}
