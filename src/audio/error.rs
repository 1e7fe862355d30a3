use std::io;
use std::path::PathBuf;

use rodio::StreamError;
use rodio::decoder::DecoderError;
use thiserror::Error;

/// Failures that abort a playback session before any worker loop is spawned.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The audio output device could not be opened.
    #[error("failed to open audio output device: {0}")]
    Device(#[from] StreamError),

    /// The track file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The track file could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecoderError,
    },

    /// The worker thread died before playback started.
    #[error("audio session thread exited before playback started")]
    ThreadExited,
}
