//! Runs the progress reporter and input listener for one session.

use std::thread;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{error, warn};

use crate::audio::{AudioError, PlaybackSession};
use crate::config::Settings;
use crate::library::Track;
use crate::ui::progress;

use super::input;

/// Play `track` to completion or cancellation.
///
/// Opens the session (all startup failures propagate before any worker loop
/// exists), spawns the reporter and listener, blocks on the stop signal,
/// then joins both loops and releases the session.
pub fn run_session(track: &Track, settings: &Settings) -> Result<(), AudioError> {
    let session = PlaybackSession::open(track)?;
    let stop = session.stop_signal();

    println!("Playing: {}", track.display);
    println!("keys: [p]ause/resume  [r]ewind  [s]top  [q]uit");

    if let Err(e) = enable_raw_mode() {
        // Keys will arrive line-buffered, but playback still works.
        warn!("could not enable raw terminal mode: {e}");
    }

    thread::scope(|s| {
        let reporter = s.spawn(|| progress::run_reporter(&session, &stop, &settings.ui));
        let listener = s.spawn(|| input::run_listener(&session, &stop));

        stop.wait();

        if reporter.join().is_err() {
            error!("progress reporter panicked");
        }
        if listener.join().is_err() {
            error!("input listener panicked");
        }
    });

    if let Err(e) = disable_raw_mode() {
        warn!("could not restore terminal mode: {e}");
    }

    session.close();
    Ok(())
}
