//! Single owner of the playback state.
//!
//! `PlayerStore` applies commands in the order they arrive and pushes a
//! snapshot to every subscriber after each change. `PlayerHandle` is the
//! cloneable handle the shell builds once and passes to every consumer.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use super::command::Command;
use super::state::{MissingTrackPolicy, PlaybackState};
use crate::catalog::Track;
use crate::error::{Error, Result};

pub struct PlayerStore {
    state: PlaybackState,
    missing_track: MissingTrackPolicy,
    subscribers: Vec<Sender<PlaybackState>>,
}

impl PlayerStore {
    /// Create a store with `queue` loaded and nothing playing.
    pub fn new(queue: Vec<Track>, missing_track: MissingTrackPolicy) -> Self {
        Self {
            state: PlaybackState::with_queue(queue),
            missing_track,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn missing_track_policy(&self) -> MissingTrackPolicy {
        self.missing_track
    }

    /// Apply `cmd` and notify subscribers if the state changed.
    pub fn dispatch(&mut self, cmd: Command) -> bool {
        log::trace!("dispatch {cmd:?}");
        let changed = cmd.apply(&mut self.state, self.missing_track);
        if changed {
            self.notify();
        }
        changed
    }

    /// Register for snapshots. The receiver gets one snapshot per state
    /// change from now on; dropping it unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<PlaybackState> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let snapshot = &self.state;
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

/// Shared handle to the session's `PlayerStore`.
#[derive(Clone)]
pub struct PlayerHandle {
    inner: Arc<Mutex<PlayerStore>>,
}

impl PlayerHandle {
    pub fn new(store: PlayerStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PlayerStore>> {
        self.inner.lock().map_err(|_| Error::PlayerUnavailable)
    }

    /// Apply `cmd`; returns whether the state changed.
    pub fn dispatch(&self, cmd: Command) -> Result<bool> {
        Ok(self.lock()?.dispatch(cmd))
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Result<PlaybackState> {
        Ok(self.lock()?.state().clone())
    }

    pub fn subscribe(&self) -> Result<Receiver<PlaybackState>> {
        Ok(self.lock()?.subscribe())
    }

    pub fn play(&self, track: Track) -> Result<bool> {
        self.dispatch(Command::Play(track))
    }

    pub fn pause(&self) -> Result<bool> {
        self.dispatch(Command::Pause)
    }

    pub fn toggle(&self) -> Result<bool> {
        self.dispatch(Command::Toggle)
    }

    pub fn next(&self) -> Result<bool> {
        self.dispatch(Command::Next)
    }

    pub fn previous(&self) -> Result<bool> {
        self.dispatch(Command::Previous)
    }

    pub fn set_queue(&self, tracks: Vec<Track>) -> Result<bool> {
        self.dispatch(Command::SetQueue(tracks))
    }

    pub fn seek(&self, time: f64) -> Result<bool> {
        self.dispatch(Command::Seek(time))
    }

    pub fn open_full_player(&self) -> Result<bool> {
        self.dispatch(Command::OpenFullPlayer)
    }

    pub fn close_full_player(&self) -> Result<bool> {
        self.dispatch(Command::CloseFullPlayer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_handle_reports_unavailable() {
        let handle = PlayerHandle::new(PlayerStore::new(Vec::new(), MissingTrackPolicy::default()));

        let inner = handle.inner.clone();
        let _ = std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("consumer panicked while holding the player");
        })
        .join();

        assert!(matches!(handle.snapshot(), Err(Error::PlayerUnavailable)));
        assert!(matches!(handle.toggle(), Err(Error::PlayerUnavailable)));
    }
}
