//! Small shared types for the audio subsystem.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Commands accepted by the session worker thread.
#[derive(Debug)]
pub enum SessionCmd {
    /// Toggle pause/resume on the current sink.
    TogglePause,
    /// Halt playback immediately (no fade-out).
    Stop,
    /// Restart the current track from position zero.
    Rewind,
    /// Shut down the worker thread.
    Quit,
}

/// Runtime playback information shared with the progress reporter.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Current transport position, or `None` once playback has halted.
    pub position: Option<Duration>,
    /// Total track duration, when known.
    pub duration: Option<Duration>,
    /// Whether playback is currently paused.
    pub paused: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            position: None,
            duration: None,
            paused: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
