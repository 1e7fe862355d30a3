use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/toccata/config.toml` or `~/.config/toccata/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TOCCATA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned when no path argument is given.
    pub music_dir: String,

    /// Name fragments that mark a file as playable. A file is kept when its
    /// name *contains* any of these, compared case-insensitively. This is a
    /// substring match, not an extension check: "demo.mp3.bak" is kept too.
    pub patterns: Vec<String>,

    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: "Music".to_string(),
            patterns: vec![".mp3".into(), ".wav".into()],
            recursive: false,
            follow_links: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Width of the progress bar in characters (excluding the brackets).
    pub bar_width: usize,

    /// Progress redraw interval in milliseconds.
    pub refresh_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            bar_width: 50,
            refresh_ms: 1000,
        }
    }
}
