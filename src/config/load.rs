use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings: config file (if present) overridden by `TOCCATA__`
    /// environment variables, on top of struct defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TOCCATA")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Sanity checks that cannot be expressed in the schema itself.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.bar_width == 0 {
            return Err("ui.bar_width must be >= 1".to_string());
        }
        if self.ui.refresh_ms == 0 {
            return Err("ui.refresh_ms must be >= 1".to_string());
        }
        if self.library.patterns.iter().all(|p| p.trim().is_empty()) {
            return Err("library.patterns must contain at least one non-empty entry".to_string());
        }
        Ok(())
    }
}

/// Config file location: `TOCCATA_CONFIG_PATH` wins, then the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    match env::var_os("TOCCATA_CONFIG_PATH") {
        Some(p) => Some(PathBuf::from(p)),
        None => default_config_path(),
    }
}

/// `$XDG_CONFIG_HOME/toccata/config.toml`, falling back to
/// `~/.config/toccata/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(env::var_os("HOME")?).join(".config"),
    };

    Some(config_home.join("toccata").join("config.toml"))
}
