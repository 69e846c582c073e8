//! Config storage
//!
//! Settings files are plain pretty-printed JSON living in the platform
//! config directory. Apps own their settings types; this module only knows
//! how to find, read and write them.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// True when the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "tapcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a settings file path. `env_var` wins when set and non-empty.
pub fn settings_path(app_name: &str, env_var: &str) -> PathBuf {
    match std::env::var(env_var) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => config_dir(app_name).join("settings.json"),
    }
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load `T` from `path`, falling back to `T::default()`.
///
/// A missing file is the normal first-run case and is not logged above
/// debug. Anything else (unreadable, malformed) is reported as a warning.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path) {
        Ok(value) => {
            log::debug!("loaded config from {}", path.display());
            value
        }
        Err(e) if e.is_not_found() => {
            log::debug!("no config at {}, using defaults", path.display());
            T::default()
        }
        Err(e) => {
            log::warn!("ignoring config at {}: {}", path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        size: u32,
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tapcore-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = scratch_dir("save");
        let path = dir.join("nested").join("settings.json");
        let sample = Sample { name: "calc".into(), size: 7 };

        save_json(&path, &sample).unwrap();
        assert!(path.exists());
        assert_eq!(load_json::<Sample>(&path).unwrap(), sample);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = scratch_dir("missing").join("nope.json");
        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(load_or_default::<Sample>(&path), Sample::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = scratch_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(!err.is_not_found());
        assert_eq!(load_or_default::<Sample>(&path), Sample::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_settings_path_defaults_to_config_dir() {
        let path = settings_path("tapcore-test", "TAPCORE_TEST_UNSET_VAR");
        assert!(path.ends_with("settings.json"));
    }

    #[test]
    fn test_settings_path_env_override() {
        let var = "TAPCORE_TEST_CONFIG_OVERRIDE";
        std::env::set_var(var, "/tmp/tapcore/custom.json");
        assert_eq!(settings_path("tapcore-test", var), PathBuf::from("/tmp/tapcore/custom.json"));
        std::env::remove_var(var);
    }

    #[test]
    fn test_settings_path_blank_env_falls_back() {
        let var = "TAPCORE_TEST_CONFIG_BLANK";
        std::env::set_var(var, "  ");
        assert_eq!(
            settings_path("tapcore-test", var),
            config_dir("tapcore-test").join("settings.json")
        );
        std::env::remove_var(var);
    }
}
