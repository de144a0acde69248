use super::state::{Direction, MissingTrackPolicy, PlaybackState};
use crate::catalog::Track;

/// A player operation, applied to a `PlaybackState` by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load the given track and start it from 0.
    Play(Track),
    /// Stop advancing; keep the track loaded.
    Pause,
    /// Flip play/pause.
    Toggle,
    /// Skip to the next queue entry (wraps).
    Next,
    /// Go back to the previous queue entry (wraps).
    Previous,
    /// Replace the queue wholesale.
    SetQueue(Vec<Track>),
    /// Set elapsed seconds, unclamped.
    Seek(f64),
    /// Show the full player.
    OpenFullPlayer,
    /// Hide the full player.
    CloseFullPlayer,
}

impl Command {
    /// Apply the command, returning whether `state` changed.
    pub fn apply(self, state: &mut PlaybackState, policy: MissingTrackPolicy) -> bool {
        match self {
            Command::Play(track) => state.play(track),
            Command::Pause => state.pause(),
            Command::Toggle => state.toggle(),
            Command::Next => state.advance(Direction::Forward, policy),
            Command::Previous => state.advance(Direction::Backward, policy),
            Command::SetQueue(tracks) => state.set_queue(tracks),
            Command::Seek(time) => state.seek(time),
            Command::OpenFullPlayer => state.open_full_player(),
            Command::CloseFullPlayer => state.close_full_player(),
        }
    }
}
