//! User preferences, read once at startup

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "tapcalc";

/// Overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "TAPCALC_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub display_font_size: f32,
    pub trace_font_size: f32,
    pub key_font_size: f32,
    /// Accept digits and operators from the keyboard.
    pub keyboard_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 280.0,
            window_height: 400.0,
            display_font_size: 30.0,
            trace_font_size: 14.0,
            key_font_size: 18.0,
            keyboard_input: true,
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        tapcore::config::settings_path(APP_NAME, CONFIG_ENV_VAR)
    }

    /// Never fails: problems are logged and defaults used instead.
    pub fn load_from(path: &Path) -> Self {
        tapcore::config::load_or_default::<Settings>(path).sanitized()
    }

    /// Replace unusable sizes with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        let usable = |v: f32, min: f32| v.is_finite() && v >= min;
        if !usable(self.window_width, 160.0) {
            log::warn!("window_width {} too small, using {}", self.window_width, defaults.window_width);
            self.window_width = defaults.window_width;
        }
        if !usable(self.window_height, 240.0) {
            log::warn!("window_height {} too small, using {}", self.window_height, defaults.window_height);
            self.window_height = defaults.window_height;
        }
        if !usable(self.display_font_size, 6.0) {
            log::warn!("display_font_size {} too small, using {}", self.display_font_size, defaults.display_font_size);
            self.display_font_size = defaults.display_font_size;
        }
        if !usable(self.trace_font_size, 6.0) {
            log::warn!("trace_font_size {} too small, using {}", self.trace_font_size, defaults.trace_font_size);
            self.trace_font_size = defaults.trace_font_size;
        }
        if !usable(self.key_font_size, 6.0) {
            log::warn!("key_font_size {} too small, using {}", self.key_font_size, defaults.key_font_size);
            self.key_font_size = defaults.key_font_size;
        }
        self
    }
}
