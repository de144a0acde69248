//! Player module: playback state, the commands that change it, and the
//! store that owns it.
//!
//! The state performs no audio I/O. A real audio engine would subscribe to
//! snapshots and call `seek` from its own clock while a track plays.

mod command;
mod state;
mod store;

pub use command::*;
pub use state::*;
pub use store::*;
