//! Playback session: device ownership, transport control and the stop signal.
//!
//! The output stream cannot move across threads, so each session runs a
//! dedicated worker thread that owns the stream and sink. The
//! `PlaybackSession` handle talks to it over a channel and shares progress
//! through `PlaybackInfo`.

mod error;
mod session;
mod signal;
mod sink;
mod thread;
mod types;

pub use error::AudioError;
pub use session::PlaybackSession;
pub use signal::StopSignal;
pub use types::PlaybackInfo;

#[cfg(test)]
mod tests;
