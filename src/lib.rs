//! Player state and catalog core for the SoundReach music discovery app.
//!
//! The UI shell builds one [`Session`] at startup and hands its
//! [`PlayerHandle`] to the mini player, the full player and every song row.
//! Screens read [`PlaybackState`] snapshots and change playback only through
//! the handle's operations.

pub mod catalog;
pub mod config;
pub mod error;
pub mod player;
pub mod session;

pub use catalog::{Artist, Catalog, Track};
pub use error::{Error, Result};
pub use player::{Command, MissingTrackPolicy, PlaybackState, PlayerHandle, PlayerStore};
pub use session::Session;
