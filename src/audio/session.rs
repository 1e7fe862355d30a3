//! The session handle: one loaded track and the device playing it.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::library::Track;

use super::error::AudioError;
use super::signal::StopSignal;
use super::thread::spawn_session_thread;
use super::types::{PlaybackHandle, PlaybackInfo, SessionCmd};

/// Owns the audio device and the decoded track for one play-through.
///
/// Created when a track is selected, released by `close` (or drop) when
/// playback ends or is cancelled. At most one command loop runs per session;
/// the stop signal it owns is never shared across sessions.
pub struct PlaybackSession {
    tx: Sender<SessionCmd>,
    playback: PlaybackHandle,
    stop: StopSignal,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl PlaybackSession {
    /// Open the audio device, decode `track` and start playing it once.
    ///
    /// Any startup failure (device, file, decoder, or a dead worker) is
    /// returned before the caller gets a chance to spawn its reporter and
    /// listener loops.
    pub fn open(track: &Track) -> Result<Self, AudioError> {
        let (tx, rx) = mpsc::channel::<SessionCmd>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let playback: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let join = spawn_session_thread(track.clone(), rx, playback.clone(), ready_tx);

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                tx,
                playback,
                stop: StopSignal::new(),
                join: Mutex::new(Some(join)),
            }),
            Ok(Err(e)) => {
                let _ = join.join();
                Err(e)
            }
            Err(_) => {
                let _ = join.join();
                Err(AudioError::ThreadExited)
            }
        }
    }

    /// The stop signal owned by this session.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Snapshot of the current transport state.
    pub fn snapshot(&self) -> PlaybackInfo {
        self.playback
            .lock()
            .map(|info| info.clone())
            .unwrap_or_default()
    }

    /// Toggle pause/resume based on the sink's current paused state.
    pub fn toggle_pause(&self) {
        let _ = self.tx.send(SessionCmd::TogglePause);
    }

    /// Restart the track from position zero. Leaves the stop signal alone.
    pub fn rewind(&self) {
        let _ = self.tx.send(SessionCmd::Rewind);
    }

    /// Halt playback immediately and raise the stop signal.
    pub fn stop(&self) {
        let _ = self.tx.send(SessionCmd::Stop);
        self.stop.raise();
    }

    /// Shut down the worker and release the sink and device.
    ///
    /// Idempotent, and also run on drop, so every session is released exactly
    /// once however it ended.
    pub fn close(&self) {
        let _ = self.tx.send(SessionCmd::Quit);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.close();
    }
}
