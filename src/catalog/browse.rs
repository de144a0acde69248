//! Browse and search helpers over catalog slices.
//!
//! These return owned `Vec`s in a stable order so the result can be handed
//! straight to the player as a queue.

use super::mock::ALL_GENRES;
use super::model::{Artist, Track};

/// Filter songs for the explorer: `query` must appear in the title or the
/// artist name (case-insensitive, empty matches everything) and `genre` must
/// match exactly unless it is `"All"`.
pub fn explore(songs: &[Track], query: &str, genre: &str) -> Vec<Track> {
    let query = query.to_lowercase();
    songs
        .iter()
        .filter(|s| {
            query.is_empty()
                || s.title.to_lowercase().contains(&query)
                || s.artist.to_lowercase().contains(&query)
        })
        .filter(|s| genre == ALL_GENRES || s.genre == genre)
        .cloned()
        .collect()
}

/// Most-played songs first, ties kept in catalog order.
pub fn trending(songs: &[Track], limit: usize) -> Vec<Track> {
    let mut sorted = songs.to_vec();
    sorted.sort_by(|a, b| b.plays.cmp(&a.plays));
    sorted.truncate(limit);
    sorted
}

/// The first `limit` songs in catalog order.
pub fn recent(songs: &[Track], limit: usize) -> Vec<Track> {
    songs.iter().take(limit).cloned().collect()
}

/// Artists ordered by total plays, highest first.
pub fn top_artists(artists: &[Artist]) -> Vec<Artist> {
    let mut sorted = artists.to_vec();
    sorted.sort_by(|a, b| b.total_plays.cmp(&a.total_plays));
    sorted
}

/// Other songs sharing `song`'s genre or artist, in catalog order.
pub fn related(songs: &[Track], song: &Track, limit: usize) -> Vec<Track> {
    songs
        .iter()
        .filter(|s| !s.same_id(song) && (s.genre == song.genre || s.artist == song.artist))
        .take(limit)
        .cloned()
        .collect()
}
