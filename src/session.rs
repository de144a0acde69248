//! Application session wiring.
//!
//! A `Session` is built once at startup: it resolves the catalog, seeds the
//! player queue with the full song list and applies player defaults. Screens
//! get the `PlayerHandle` from here instead of looking it up ambiently.

use crate::catalog::{Artist, Catalog, Track, browse};
use crate::config::{MissingTrackSetting, Settings};
use crate::error::Result;
use crate::player::{Command, MissingTrackPolicy, PlayerHandle, PlayerStore};

impl From<MissingTrackSetting> for MissingTrackPolicy {
    fn from(setting: MissingTrackSetting) -> Self {
        match setting {
            MissingTrackSetting::WrapToFirst => MissingTrackPolicy::WrapToFirst,
            MissingTrackSetting::Stay => MissingTrackPolicy::Stay,
        }
    }
}

pub struct Session {
    settings: Settings,
    catalog: Catalog,
    player: PlayerHandle,
}

impl Session {
    /// Build a session from already-loaded settings.
    pub fn start(settings: Settings) -> Result<Self> {
        let catalog = match &settings.catalog.path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::demo(),
        };

        let mut store = PlayerStore::new(
            catalog.songs.clone(),
            settings.player.missing_track.into(),
        );
        if settings.player.start_expanded {
            store.dispatch(Command::OpenFullPlayer);
        }

        log::debug!(
            "session started: {} songs queued, missing-track policy {:?}",
            catalog.songs.len(),
            store.missing_track_policy()
        );

        Ok(Self {
            settings,
            catalog,
            player: PlayerHandle::new(store),
        })
    }

    /// Load settings from the environment and config file, then start.
    pub fn from_env() -> Result<Self> {
        Self::start(Settings::load_or_default())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A handle to the session's single player.
    pub fn player(&self) -> PlayerHandle {
        self.player.clone()
    }

    pub fn trending(&self) -> Vec<Track> {
        browse::trending(&self.catalog.songs, self.settings.catalog.trending_limit)
    }

    pub fn recent(&self) -> Vec<Track> {
        browse::recent(&self.catalog.songs, self.settings.catalog.recent_limit)
    }

    pub fn top_artists(&self) -> Vec<Artist> {
        browse::top_artists(&self.catalog.artists)
    }

    pub fn explore(&self, query: &str, genre: &str) -> Vec<Track> {
        browse::explore(&self.catalog.songs, query, genre)
    }

    /// Songs related to the song with id `song_id`.
    pub fn related(&self, song_id: &str) -> Result<Vec<Track>> {
        let song = self.catalog.find_song(song_id)?;
        Ok(browse::related(
            &self.catalog.songs,
            song,
            self.settings.catalog.related_limit,
        ))
    }

    /// Play the catalog song with id `song_id`.
    pub fn play_song(&self, song_id: &str) -> Result<bool> {
        let song = self.catalog.find_song(song_id)?.clone();
        self.player.play(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn demo_session_queues_every_song() {
        let session = Session::start(Settings::default()).unwrap();
        let state = session.player().snapshot().unwrap();
        assert_eq!(state.queue().len(), 10);
        assert!(state.current_track().is_none());
        assert!(!state.is_expanded_view());
    }

    #[test]
    fn start_expanded_opens_full_player() {
        let mut settings = Settings::default();
        settings.player.start_expanded = true;
        let session = Session::start(settings).unwrap();
        assert!(session.player().snapshot().unwrap().is_expanded_view());
    }

    #[test]
    fn stay_policy_reaches_the_store() {
        let mut settings = Settings::default();
        settings.player.missing_track = MissingTrackSetting::Stay;
        let session = Session::start(settings).unwrap();
        let player = session.player();

        player.play(Track::new("x", "Elsewhere", "Nobody", "Jazz", 60)).unwrap();
        assert!(!player.next().unwrap());
        assert!(player.snapshot().unwrap().is_current("x"));
    }

    #[test]
    fn shelves_follow_configured_limits() {
        let mut settings = Settings::default();
        settings.catalog.trending_limit = 2;
        settings.catalog.recent_limit = 3;
        settings.catalog.related_limit = 1;
        let session = Session::start(settings).unwrap();

        assert_eq!(session.trending().len(), 2);
        assert_eq!(session.recent().len(), 3);
        assert_eq!(session.related("1").unwrap().len(), 1);
        assert_eq!(session.top_artists()[0].name, "Kofi Beats");
        assert_eq!(session.explore("fire", "All")[0].id, "9");
    }

    #[test]
    fn play_song_by_id_then_step_through_catalog_queue() {
        let session = Session::start(Settings::default()).unwrap();
        session.play_song("10").unwrap();

        let player = session.player();
        player.next().unwrap();
        assert!(player.snapshot().unwrap().is_current("1"));

        assert!(matches!(session.play_song("nope"), Err(Error::TrackNotFound(_))));
        assert!(matches!(session.related("nope"), Err(Error::TrackNotFound(_))));
    }

    #[test]
    fn session_loads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[[songs]]\nid = \"s1\"\ntitle = \"One\"\nartist = \"A\"\ngenre = \"Pop\"\nduration = 100\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.catalog.path = Some(path);
        let session = Session::start(settings).unwrap();
        assert_eq!(session.catalog().songs.len(), 1);
        assert_eq!(session.player().snapshot().unwrap().queue()[0].id, "s1");
    }
}
