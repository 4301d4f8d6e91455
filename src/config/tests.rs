use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_melody_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MELODY_CONFIG_PATH", "/tmp/melody-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/melody-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("melody")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("melody")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/melody/melody.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/melody/melody.log")
    );
}

#[test]
fn settings_defaults_match_a_fresh_player() {
    let s = Settings::default();
    assert_eq!(s.audio.initial_volume, 70);
    assert_eq!(s.audio.refresh_interval_ms, 1000);
    assert_eq!(s.controls.volume_step, 5);
    assert!(!s.browser.include_hidden);
    assert!(s.browser.start_dir.is_none());
    assert_eq!(s.log.filter, "info");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 40
refresh_interval_ms = 250

[controls]
volume_step = 10
seek_step_seconds = 15
seek_release_ms = 300

[browser]
extensions = ["flac"]
include_hidden = true
start_dir = "/srv/music"

[ui]
header_text = "hello"

[log]
file = "/tmp/melody.log"
filter = "melody=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MELODY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MELODY__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 40);
    assert_eq!(s.audio.refresh_interval_ms, 250);
    assert_eq!(s.controls.volume_step, 10);
    assert_eq!(s.controls.seek_step_seconds, 15);
    assert_eq!(s.controls.seek_release_ms, 300);
    assert_eq!(s.browser.extensions, vec!["flac".to_string()]);
    assert!(s.browser.include_hidden);
    assert_eq!(
        s.browser.start_dir,
        Some(std::path::PathBuf::from("/srv/music"))
    );
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.log.file, Some(std::path::PathBuf::from("/tmp/melody.log")));
    assert_eq!(s.log.filter, "melody=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 40
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MELODY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MELODY__AUDIO__INITIAL_VOLUME", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 90);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.initial_volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.refresh_interval_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.seek_release_ms = 0;
    assert!(s.validate().is_err());
}
