//! Playback state and its transitions.
//!
//! Every transition is synchronous and total. Each returns `true` when the
//! state actually changed so the store knows whether to notify subscribers.

use crate::catalog::Track;

/// What `next`/`previous` do when the current track is not in the queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MissingTrackPolicy {
    /// Treat the lookup as index -1 and wrap: `next` lands on the first
    /// track, `previous` on the second to last.
    WrapToFirst,
    /// Leave the state unchanged.
    Stay,
}

impl Default for MissingTrackPolicy {
    fn default() -> Self {
        Self::WrapToFirst
    }
}

/// Direction of a queue step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The player's mutable record: what is loaded, whether it plays, how far
/// in it is, whether the full player is open, and the queue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    current_track: Option<Track>,
    is_playing: bool,
    elapsed: f64,
    is_expanded_view: bool,
    queue: Vec<Track>,
}

impl PlaybackState {
    /// A stopped state with `queue` loaded and nothing playing.
    pub fn with_queue(queue: Vec<Track>) -> Self {
        Self {
            queue,
            ..Self::default()
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Seconds into the current track, exactly as last set by `seek`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_expanded_view(&self) -> bool {
        self.is_expanded_view
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Whether the loaded track has id `track_id`.
    pub fn is_current(&self, track_id: &str) -> bool {
        self.current_track
            .as_ref()
            .is_some_and(|t| t.id == track_id)
    }

    /// Position of the current track in the queue (first match by id).
    pub fn current_index(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.queue.iter().position(|t| t.same_id(current))
    }

    /// Progress through the current track in percent.
    ///
    /// 0 when nothing is loaded or the duration is 0. Not clamped, since
    /// `elapsed` is not.
    pub fn progress_percent(&self) -> f64 {
        match &self.current_track {
            Some(t) if t.duration > 0 => self.elapsed / f64::from(t.duration) * 100.0,
            _ => 0.0,
        }
    }

    /// Load `track` and start it from the beginning. The track does not
    /// have to be in the queue.
    pub fn play(&mut self, track: Track) -> bool {
        self.load(track)
    }

    pub fn pause(&mut self) -> bool {
        let changed = self.is_playing;
        self.is_playing = false;
        changed
    }

    /// Flip the playing flag. With nothing loaded this yields an inert
    /// "playing" state with no track, which is allowed.
    pub fn toggle(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        true
    }

    /// Step to the next queue entry, wrapping last to first.
    pub fn next(&mut self) -> bool {
        self.advance(Direction::Forward, MissingTrackPolicy::default())
    }

    /// Step to the previous queue entry, wrapping first to last.
    pub fn previous(&mut self) -> bool {
        self.advance(Direction::Backward, MissingTrackPolicy::default())
    }

    /// Step through the queue and force playback from 0.
    ///
    /// No-op when nothing is loaded or the queue is empty. When the current
    /// track is absent from the queue, `policy` decides.
    pub fn advance(&mut self, direction: Direction, policy: MissingTrackPolicy) -> bool {
        match self.target_index(direction, policy) {
            Some(i) => {
                let track = self.queue[i].clone();
                self.load(track)
            }
            None => false,
        }
    }

    /// Replace the queue. Leaves the current track, playing flag and
    /// elapsed time alone.
    pub fn set_queue(&mut self, tracks: Vec<Track>) -> bool {
        if self.queue == tracks {
            return false;
        }
        self.queue = tracks;
        true
    }

    /// Store `time` verbatim; callers are responsible for keeping it within
    /// the track.
    pub fn seek(&mut self, time: f64) -> bool {
        // NaN never compares equal, so seeking to NaN always reports a change.
        let changed = self.elapsed != time;
        self.elapsed = time;
        changed
    }

    pub fn open_full_player(&mut self) -> bool {
        let changed = !self.is_expanded_view;
        self.is_expanded_view = true;
        changed
    }

    pub fn close_full_player(&mut self) -> bool {
        let changed = self.is_expanded_view;
        self.is_expanded_view = false;
        changed
    }

    fn load(&mut self, track: Track) -> bool {
        let changed = self.current_track.as_ref() != Some(&track)
            || !self.is_playing
            || self.elapsed != 0.0;
        self.current_track = Some(track);
        self.is_playing = true;
        self.elapsed = 0.0;
        changed
    }

    fn target_index(&self, direction: Direction, policy: MissingTrackPolicy) -> Option<usize> {
        let current = self.current_track.as_ref()?;

        if self.queue.is_empty() {
            log::debug!("{direction:?} ignored: queue is empty");
            return None;
        }

        let index = match self.queue.iter().position(|t| t.same_id(current)) {
            Some(i) => i as isize,
            None => match policy {
                MissingTrackPolicy::Stay => {
                    log::debug!("{direction:?} ignored: track {} not in queue", current.id);
                    return None;
                }
                MissingTrackPolicy::WrapToFirst => {
                    log::debug!("track {} not in queue, stepping from -1", current.id);
                    -1
                }
            },
        };

        let len = self.queue.len() as isize;
        let target = match direction {
            Direction::Forward => index + 1,
            Direction::Backward => index - 1 + len,
        };
        // Euclidean remainder keeps the -1 lookup inside the queue.
        Some(target.rem_euclid(len) as usize)
    }
}
