use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

// Environment mutation is process-global; serialize the tests that touch it.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn apply(key: &'static str, val: Option<&str>) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            match val {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { key, old }
    }

    fn set(key: &'static str, val: &str) -> Self {
        Self::apply(key, Some(val))
    }

    fn remove(key: &'static str) -> Self {
        Self::apply(key, None)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.old.take() {
                Some(v) => std::env::set_var(self.key, v),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

#[test]
fn defaults_are_sane() {
    let s = Settings::default();
    assert_eq!(s.library.music_dir, "Music");
    assert_eq!(
        s.library.patterns,
        vec![".mp3".to_string(), ".wav".to_string()]
    );
    assert!(!s.library.recursive);
    assert_eq!(s.ui.bar_width, 50);
    assert_eq!(s.ui.refresh_ms, 1000);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut s = Settings::default();
    s.ui.bar_width = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.refresh_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.patterns = vec!["  ".to_string()];
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_toccata_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TOCCATA_CONFIG_PATH", "/tmp/toccata-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/toccata-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("toccata")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("toccata")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
music_dir = "/srv/audio"
patterns = [".mp3"]
recursive = true
follow_links = false
max_depth = 3

[ui]
bar_width = 40
refresh_ms = 500
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TOCCATA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TOCCATA__UI__BAR_WIDTH");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.music_dir, "/srv/audio");
    assert_eq!(s.library.patterns, vec![".mp3".to_string()]);
    assert!(s.library.recursive);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(s.ui.bar_width, 40);
    assert_eq!(s.ui.refresh_ms, 500);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
bar_width = 40
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TOCCATA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TOCCATA__UI__BAR_WIDTH", "25");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.bar_width, 25);
}
