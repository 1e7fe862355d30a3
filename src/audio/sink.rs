//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` positioned at zero.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, Sink};

use crate::library::Track;

use super::error::AudioError;

/// Open and decode `track`, returning a paused `Sink` ready to play.
pub(super) fn create_sink(stream: &OutputStream, track: &Track) -> Result<Sink, AudioError> {
    let file = File::open(&track.path).map_err(|e| AudioError::Open {
        path: track.path.clone(),
        source: e,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: track.path.clone(),
        source: e,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
