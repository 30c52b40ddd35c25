use log::Level;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

use model::composer::DEFAULT_LOADING_DELAY_MS;

/// localStorage key holding the JSON-encoded [`StoredSettings`].
const STORAGE_KEY: &str = "ai8_settings";

/// Which dashboard composer renders the Dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardLayout {
    /// Tabbed dashboard with metric cards and charts
    #[default]
    Classic,
    /// Compact widget board with activity feed
    Widgets,
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How long the "Updating data..." overlay stays visible after a filter change
    pub loading_delay_ms: u32,

    /// Dashboard composer variant
    pub dashboard_layout: DashboardLayout,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            dashboard_layout: DashboardLayout::Classic,
        }
    }
}

/// Overrides persisted in localStorage. Missing fields keep their defaults.
///
/// Only display preferences live here; page, tab and filter selections are
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSettings {
    pub log_level: Option<String>,
    pub loading_delay_ms: Option<u32>,
    pub dashboard_layout: Option<DashboardLayout>,
}

pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                    match serde_json::from_str::<StoredSettings>(&raw) {
                        Ok(stored) => settings.apply(&stored),
                        // The logger is not up yet, so report straight to the console.
                        Err(e) => web_sys::console::warn_1(&JsValue::from_str(&format!(
                            "ignoring malformed {STORAGE_KEY}: {e}"
                        ))),
                    }
                }
            }
        }

        settings
    }

    /// Layers stored overrides on top of the current values.
    pub fn apply(&mut self, stored: &StoredSettings) {
        if let Some(level) = stored.log_level.as_deref().and_then(parse_log_level) {
            self.log_level = level;
        }
        if let Some(delay) = stored.loading_delay_ms {
            self.loading_delay_ms = delay;
        }
        if let Some(layout) = stored.dashboard_layout {
            self.dashboard_layout = layout;
        }
    }

    pub fn to_stored(&self) -> StoredSettings {
        StoredSettings {
            log_level: Some(self.log_level.as_str().to_lowercase()),
            loading_delay_ms: Some(self.loading_delay_ms),
            dashboard_layout: Some(self.dashboard_layout),
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                let json = serde_json::to_string(&self.to_stored())
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                storage.set_item(STORAGE_KEY, &json)?;
            }
        }
        Ok(())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_overrides_are_layered() {
        let stored: StoredSettings =
            serde_json::from_str(r#"{"log_level":"TRACE","dashboard_layout":"widgets"}"#).unwrap();
        let mut settings = AppSettings::default();
        settings.apply(&stored);

        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.dashboard_layout, DashboardLayout::Widgets);
        assert_eq!(settings.loading_delay_ms, 800);
    }

    #[test]
    fn unknown_log_level_keeps_current() {
        let mut settings = AppSettings::default();
        settings.apply(&StoredSettings {
            log_level: Some("loud".into()),
            ..Default::default()
        });
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn stored_round_trip_keeps_values() {
        let mut settings = AppSettings::default();
        settings.loading_delay_ms = 250;
        let stored = settings.to_stored();
        assert_eq!(stored.log_level.as_deref(), Some("info"));

        let mut restored = AppSettings::default();
        restored.apply(&stored);
        assert_eq!(restored.loading_delay_ms, 250);
    }

    #[test]
    fn only_preferences_are_persisted() {
        let mut settings = AppSettings::default();
        settings.dashboard_layout = DashboardLayout::Widgets;
        let json = serde_json::to_value(settings.to_stored()).unwrap();

        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["dashboard_layout", "loading_delay_ms", "log_level"]);
        assert_eq!(json["dashboard_layout"], "widgets");
    }

    #[test]
    fn update_settings_mutates_global_copy() {
        update_settings(|s| s.dashboard_layout = DashboardLayout::Widgets);
        assert_eq!(get_settings().dashboard_layout, DashboardLayout::Widgets);
    }
}
