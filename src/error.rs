//! Error types shared across the crate.
//!
//! Player transitions are total and never fail; errors come from loading
//! configuration or catalog data, from looking up songs, from validating an
//! upload draft, or from a poisoned player handle.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Settings were loaded but failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid TOML or does not match the schema.
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Two songs in one catalog share an id.
    #[error("duplicate track id in catalog: {0}")]
    DuplicateTrackId(String),

    /// No song with the requested id exists.
    #[error("song not found: {0}")]
    TrackNotFound(String),

    /// The shared player was poisoned by a panicking consumer.
    #[error("player handle is unavailable: a consumer panicked while holding it")]
    PlayerUnavailable,

    /// Title, artist name and genre are required for an upload.
    #[error("please fill in all required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    /// Uploads require confirming ownership of the content.
    #[error("you must confirm you own the rights to this content")]
    RightsNotConfirmed,

    #[error("unsupported audio format: {0}")]
    UnsupportedAudioFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
