//! Keyboard listener for one playback session.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;

use crate::audio::{PlaybackSession, StopSignal};

const POLL: Duration = Duration::from_millis(200);

/// Key loop: `p` pause/resume, `r` rewind, `s`/`q` stop.
///
/// Polls with a timeout and re-checks the stop signal between polls, so the
/// loop also ends when the reporter raises the signal after a track finishes
/// on its own — no trailing keypress required.
pub fn run_listener(session: &PlaybackSession, stop: &StopSignal) {
    loop {
        if stop.is_raised() {
            break;
        }

        match event::poll(POLL) {
            Ok(false) => continue,
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('p') => session.toggle_pause(),
                    KeyCode::Char('r') => session.rewind(),
                    KeyCode::Char('s') | KeyCode::Char('q') => {
                        session.stop();
                        break;
                    }
                    _ => {}
                },
                Ok(_) => {}
                Err(e) => {
                    // No key input means no way to command the session; end it.
                    warn!("input read failed: {e}");
                    session.stop();
                    break;
                }
            },
            Err(e) => {
                warn!("input poll failed: {e}");
                session.stop();
                break;
            }
        }
    }
}
