use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// Returns the settings plus the reason defaults were used, if they were.
/// Logging is not up yet when this runs, so the caller reports the reason.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    Some(format!("invalid config, using defaults: {msg}")),
                )
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

/// Log a deferred settings problem once the subscriber exists.
pub fn report(problem: Option<&str>) {
    if let Some(problem) = problem {
        warn!("{problem}");
    }
}
