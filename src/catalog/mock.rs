//! Built-in demo catalog.
//!
//! Ten songs and six artists, used when no catalog file is configured.

use super::model::{Artist, Track};

/// Genre chips offered by the explorer. `"All"` is the match-everything
/// sentinel and always comes first.
pub const GENRES: &[&str] = &[
    "All",
    "Afrobeats",
    "Afropop",
    "R&B",
    "Hip Hop",
    "Electronic",
    "Chill",
    "Gospel",
    "Pop",
    "Jazz",
];

/// The genre sentinel that matches every song.
pub const ALL_GENRES: &str = "All";

#[allow(clippy::too_many_arguments)]
fn song(
    id: &str,
    title: &str,
    artist: &str,
    genre: &str,
    duration: u32,
    plays: u64,
    release_date: &str,
    isrc: &str,
    audio_format: &str,
) -> Track {
    Track {
        plays,
        release_date: Some(release_date.to_string()),
        isrc: Some(isrc.to_string()),
        audio_format: Some(audio_format.to_string()),
        uploaded_by: Some(artist.to_string()),
        ..Track::new(id, title, artist, genre, duration)
    }
}

fn with_lyrics(track: Track, lyrics: &str) -> Track {
    Track {
        lyrics: Some(lyrics.to_string()),
        ..track
    }
}

fn with_description(track: Track, description: &str) -> Track {
    Track {
        description: Some(description.to_string()),
        ..track
    }
}

/// The demo song list, in catalog order.
pub fn songs() -> Vec<Track> {
    vec![
        with_description(
            with_lyrics(
                song("1", "Midnight Groove", "Luna Wave", "Afrobeats", 234, 12_400, "2026-01-15", "USRC11234567", "MP3"),
                "Feel the rhythm in the night\nLet the music take you high\nEvery beat a new delight\nDancing underneath the sky\n\nMidnight groove, midnight groove\nNothing left for us to prove\nJust the sound and you and me\nLost in this melody",
            ),
            "A smooth Afrobeats track perfect for late-night vibes.",
        ),
        with_lyrics(
            song("2", "Sunrise Dreams", "Kofi Beats", "Afropop", 198, 8_900, "2026-01-20", "USRC11234568", "WAV"),
            "Wake up to the morning light\nEverything is gonna be alright\nSunrise dreams on my mind\nLeaving yesterday behind",
        ),
        with_description(
            with_lyrics(
                song("3", "City Lights", "Amara Gold", "R&B", 267, 23_100, "2025-12-01", "USRC11234569", "FLAC"),
                "City lights are shining bright\nWalking through the urban night\nEvery corner, every street\nMakes my heart skip a beat",
            ),
            "An R&B anthem for the city dwellers.",
        ),
        Track {
            explicit: true,
            ..with_description(
                song("4", "Thunder Road", "Storm Collective", "Hip Hop", 210, 45_600, "2026-02-01", "USRC11234570", "MP3"),
                "Hard-hitting Hip Hop with raw energy and powerful bars.",
            )
        },
        with_lyrics(
            song("5", "Ocean Breeze", "Tidal Sound", "Chill", 312, 6_700, "2025-11-10", "USRC11234571", "MP3"),
            "Waves are crashing on the shore\nPeaceful like never before\nOcean breeze upon my face\nFound my happy place",
        ),
        with_description(
            song("6", "Neon Pulse", "Electra", "Electronic", 245, 31_200, "2026-01-05", "USRC11234572", "WAV"),
            "Pulsating electronic beats that light up the dance floor.",
        ),
        with_lyrics(
            song("7", "Golden Hour", "Amara Gold", "Afropop", 189, 18_400, "2025-12-20", "USRC11234573", "MP3"),
            "In the golden hour we shine\nEvery moment feels divine\nHold my hand and close your eyes\nWatch the colors fill the skies",
        ),
        song("8", "Velvet Night", "Luna Wave", "R&B", 276, 9_800, "2026-02-10", "USRC11234574", "FLAC"),
        song("9", "Fire Dance", "Kofi Beats", "Afrobeats", 223, 54_300, "2025-10-15", "USRC11234575", "MP3"),
        with_lyrics(
            song("10", "Starfall", "Tidal Sound", "Chill", 298, 7_200, "2026-01-28", "USRC11234576", "WAV"),
            "Stars are falling from the sky\nMake a wish as they go by\nEvery light a story told\nMore precious than gold",
        ),
    ]
}

fn artist(id: &str, name: &str, genre: &str, song_count: u32, total_plays: u64) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: None,
        genre: genre.to_string(),
        song_count,
        total_plays,
    }
}

/// The demo artist list, in catalog order.
pub fn artists() -> Vec<Artist> {
    vec![
        artist("a1", "Luna Wave", "Afrobeats / R&B", 2, 22_200),
        artist("a2", "Kofi Beats", "Afrobeats / Afropop", 2, 63_200),
        artist("a3", "Amara Gold", "R&B / Afropop", 2, 41_500),
        artist("a4", "Storm Collective", "Hip Hop", 1, 45_600),
        artist("a5", "Tidal Sound", "Chill", 2, 13_900),
        artist("a6", "Electra", "Electronic", 1, 31_200),
    ]
}
