use std::path::Path;
use std::time::Duration;

use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use log::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, make_display};

fn matches_patterns(name: &str, patterns: &[String]) -> bool {
    let name = name.to_ascii_lowercase();
    patterns
        .iter()
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .any(|p| name.contains(&p))
}

fn is_playable(path: &Path, settings: &LibrarySettings) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| matches_patterns(name, &settings.patterns))
        .unwrap_or(false)
}

/// Enumerate playable files under `dir`, in walk order.
///
/// Only the directory itself is visited unless `settings.recursive` is set.
/// The result is deliberately left unsorted; catalog indices follow whatever
/// order the filesystem hands back. A missing or unreadable directory yields
/// an empty catalog.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    if !dir.is_dir() {
        warn!("not a readable directory: {}", dir.display());
        return Vec::new();
    }

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker.into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if path.is_file() && is_playable(path, settings) {
            tracks.push(read_track(path));
        }
    }

    tracks
}

/// Build a `Track` for a single file, reading tags and duration when possible.
///
/// Files `lofty` cannot parse still produce a track: the title falls back to
/// the file stem and the duration stays unknown.
pub fn read_track(path: &Path) -> Track {
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut title = default_title;
    let mut artist: Option<String> = None;
    let mut duration: Option<Duration> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    title = v.to_string();
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                let v = v.trim();
                if !v.is_empty() {
                    artist = Some(v.to_string());
                }
            }
        }
    }

    let display = make_display(&title, artist.as_deref());

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        duration,
        display,
    }
}
