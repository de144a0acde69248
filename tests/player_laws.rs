//! Property tests for the player transitions.

use proptest::prelude::*;
use soundreach::{PlaybackState, Track};

fn arbitrary_track() -> impl Strategy<Value = Track> {
    ("[a-z0-9]{1,8}", "[A-Za-z ]{1,20}", 0u32..600)
        .prop_map(|(id, title, duration)| Track::new(id, title, "Artist", "Pop", duration))
}

/// A queue with unique ids, so every track has exactly one index.
fn unique_queue() -> impl Strategy<Value = Vec<Track>> {
    (1usize..20).prop_map(|n| {
        (0..n)
            .map(|i| Track::new(format!("t{i}"), format!("Track {i}"), "Artist", "Pop", 180))
            .collect()
    })
}

fn queue_and_index() -> impl Strategy<Value = (Vec<Track>, usize)> {
    unique_queue().prop_flat_map(|q| {
        let len = q.len();
        (Just(q), 0..len)
    })
}

fn current_id(state: &PlaybackState) -> Option<String> {
    state.current_track().map(|t| t.id.clone())
}

proptest! {
    #[test]
    fn play_always_loads_from_zero(
        queue in unique_queue(),
        track in arbitrary_track(),
        seek in -1000.0f64..1000.0,
        paused in any::<bool>(),
    ) {
        let mut state = PlaybackState::with_queue(queue.clone());
        state.play(queue[0].clone());
        state.seek(seek);
        if paused {
            state.pause();
        }

        state.play(track.clone());
        prop_assert_eq!(state.current_track(), Some(&track));
        prop_assert!(state.is_playing());
        prop_assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn next_moves_one_step_and_n_steps_cycle((queue, i) in queue_and_index()) {
        let n = queue.len();
        let mut state = PlaybackState::with_queue(queue.clone());
        state.play(queue[i].clone());

        state.next();
        prop_assert_eq!(state.current_index(), Some((i + 1) % n));

        for _ in 1..n {
            state.next();
        }
        prop_assert_eq!(current_id(&state), Some(queue[i].id.clone()));
    }

    #[test]
    fn previous_n_steps_cycle((queue, i) in queue_and_index()) {
        let n = queue.len();
        let mut state = PlaybackState::with_queue(queue.clone());
        state.play(queue[i].clone());

        state.previous();
        prop_assert_eq!(state.current_index(), Some((i + n - 1) % n));

        for _ in 1..n {
            state.previous();
        }
        prop_assert_eq!(current_id(&state), Some(queue[i].id.clone()));
    }

    #[test]
    fn next_then_previous_round_trips((queue, i) in queue_and_index(), seek in 0.0f64..500.0) {
        let mut state = PlaybackState::with_queue(queue.clone());
        state.play(queue[i].clone());
        state.seek(seek);

        state.next();
        state.previous();
        prop_assert_eq!(current_id(&state), Some(queue[i].id.clone()));
        prop_assert_eq!(state.elapsed(), 0.0);
        prop_assert!(state.is_playing());
    }

    #[test]
    fn toggle_is_an_involution((queue, i) in queue_and_index(), loaded in any::<bool>()) {
        let mut state = PlaybackState::with_queue(queue.clone());
        if loaded {
            state.play(queue[i].clone());
        }
        let before = state.clone();
        state.toggle();
        state.toggle();
        prop_assert_eq!(state, before);
    }

    #[test]
    fn seek_stores_any_finite_time(t in -1.0e9f64..1.0e9) {
        let mut state = PlaybackState::default();
        state.seek(t);
        prop_assert_eq!(state.elapsed(), t);
    }

    #[test]
    fn empty_queue_steps_are_noops(track in arbitrary_track(), forward in any::<bool>()) {
        let mut state = PlaybackState::with_queue(Vec::new());
        state.play(track);
        let before = state.clone();
        if forward {
            state.next();
        } else {
            state.previous();
        }
        prop_assert_eq!(state, before);
    }

    #[test]
    fn full_player_flags_never_touch_playback((queue, i) in queue_and_index(), open in any::<bool>()) {
        let mut state = PlaybackState::with_queue(queue.clone());
        state.play(queue[i].clone());
        let before = state.clone();
        if open {
            state.open_full_player();
        } else {
            state.close_full_player();
        }
        prop_assert_eq!(state.current_track(), before.current_track());
        prop_assert_eq!(state.is_playing(), before.is_playing());
        prop_assert_eq!(state.elapsed(), before.elapsed());
        prop_assert_eq!(state.queue(), before.queue());
        prop_assert_eq!(state.is_expanded_view(), open);
    }
}
