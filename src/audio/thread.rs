//! The session worker thread: owns the output stream and sink.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::error;
use rodio::{OutputStreamBuilder, Sink};

use crate::library::Track;

use super::error::AudioError;
use super::sink::create_sink;
use super::types::{PlaybackHandle, SessionCmd};

/// Housekeeping interval: how often the shared info is refreshed while no
/// command arrives.
const TICK: Duration = Duration::from_millis(200);

/// Spawn the worker for one session.
///
/// The worker opens the device, decodes `track` and starts playback, then
/// reports the startup result over `ready_tx`. On any startup failure it
/// sends the error and exits without entering the command loop.
pub(super) fn spawn_session_thread(
    track: Track,
    rx: Receiver<SessionCmd>,
    info: PlaybackHandle,
    ready_tx: Sender<Result<(), AudioError>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let _ = ready_tx.send(Err(AudioError::Device(e)));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy under a redrawing progress line.
        stream.log_on_drop(false);

        let mut sink = match create_sink(&stream, &track) {
            Ok(s) => s,
            Err(e) => {
                let _ = ready_tx.send(Err(e));
                return;
            }
        };
        sink.play();
        publish(&info, &sink, &track);

        if ready_tx.send(Ok(())).is_err() {
            // Session handle disappeared while we were starting up.
            return;
        }

        loop {
            match rx.recv_timeout(TICK) {
                Ok(SessionCmd::TogglePause) => {
                    if sink.is_paused() {
                        sink.play();
                    } else {
                        sink.pause();
                    }
                    publish(&info, &sink, &track);
                }
                Ok(SessionCmd::Rewind) => {
                    // Rebuilding the decoder is the seek primitive: a fresh
                    // sink starts cleanly at zero.
                    match create_sink(&stream, &track) {
                        Ok(fresh) => {
                            let was_paused = sink.is_paused();
                            sink.stop();
                            sink = fresh;
                            if !was_paused {
                                sink.play();
                            }
                            publish(&info, &sink, &track);
                        }
                        Err(e) => error!("rewind failed, keeping current position: {e}"),
                    }
                }
                Ok(SessionCmd::Stop) => {
                    sink.stop();
                    publish(&info, &sink, &track);
                }
                Ok(SessionCmd::Quit) | Err(RecvTimeoutError::Disconnected) => {
                    sink.stop();
                    break;
                }
                Err(RecvTimeoutError::Timeout) => publish(&info, &sink, &track),
            }
        }
    })
}

/// Refresh the shared `PlaybackInfo` from the sink state.
///
/// An empty sink is the stopped sentinel: the track drained or was halted.
fn publish(info: &PlaybackHandle, sink: &Sink, track: &Track) {
    if let Ok(mut info) = info.lock() {
        info.position = if sink.empty() {
            None
        } else {
            Some(sink.get_pos())
        };
        info.duration = track.duration;
        info.paused = sink.is_paused();
    }
}
