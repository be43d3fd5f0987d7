//! Loading of [`StepProgressSettings`] from JSON or YAML files.
//!
//! Resolution order: an explicit path (from the command line), then
//! `STEPPER_CONFIG_PATH`, then `<config_dir>/stepper/stepper.json`. Explicit
//! and environment paths must exist; the default file is optional and its
//! absence yields default settings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use stepper_types::StepProgressSettings;
use thiserror::Error;
use tracing::debug;

use crate::{expand_tilde, stepper_config_dir};

/// Environment variable pointing at a settings file.
pub const CONFIG_PATH_ENV: &str = "STEPPER_CONFIG_PATH";

/// Default settings file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "stepper.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unsupported config format for {path}; expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },
}

/// Settings plus the file they were read from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: StepProgressSettings,
    pub source: Option<PathBuf>,
}

/// Resolves and loads the widget settings.
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings, ConfigError> {
    if let Some(path) = explicit {
        let path = path.to_str().map(expand_tilde).unwrap_or_else(|| path.to_path_buf());
        return read_required(path);
    }

    if let Ok(value) = env::var(CONFIG_PATH_ENV)
        && !value.trim().is_empty()
    {
        return read_required(expand_tilde(&value));
    }

    let default_path = stepper_config_dir().join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        return read_required(default_path);
    }

    debug!("no stepper config file found; using defaults");
    Ok(LoadedSettings::default())
}

/// Parses settings text, choosing the format from the file extension.
pub fn parse_settings(path: &Path, contents: &str) -> Result<StepProgressSettings, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("json") => serde_json::from_str(contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some("yaml" | "yml") => serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(ConfigError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}

fn read_required(path: PathBuf) -> Result<LoadedSettings, ConfigError> {
    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let settings = parse_settings(&path, &contents)?;
    debug!(path = %path.display(), "loaded stepper config");
    Ok(LoadedSettings {
        settings,
        source: Some(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepper_types::StepCounts;
    use tempfile::tempdir;

    #[test]
    fn explicit_yaml_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stepper.yaml");
        fs::write(&path, "step_count: 4\nprogress_count: 3\npadding:\n  left: 2\n").unwrap();

        let loaded = load_settings(Some(&path)).unwrap();
        assert_eq!(loaded.settings.counts(), StepCounts::new(4, 3));
        assert_eq!(loaded.settings.padding.left, 2);
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let error = load_settings(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn env_override_is_used_when_no_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("from_env.json");
        fs::write(&path, r#"{"stepCount": 6, "progressCount": 6}"#).unwrap();

        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().unwrap()), || {
            let loaded = load_settings(None).unwrap();
            assert_eq!(loaded.settings.counts(), StepCounts::new(6, 6));
        });
    }

    #[test]
    fn explicit_path_expands_tilde() {
        let home = tempdir().unwrap();
        fs::write(home.path().join("stepper.json"), r#"{"step_count": 3, "progress_count": 1}"#).unwrap();

        temp_env::with_vars([("HOME", Some(home.path().to_str().unwrap())), (CONFIG_PATH_ENV, None)], || {
            let loaded = load_settings(Some(Path::new("~/stepper.json"))).unwrap();
            assert_eq!(loaded.settings.counts(), StepCounts::new(3, 1));
            assert_eq!(loaded.source, Some(home.path().join("stepper.json")));
        });
    }

    #[test]
    fn malformed_json_reports_path() {
        let path = Path::new("broken.json");
        let error = parse_settings(path, "{").unwrap_err();
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let error = parse_settings(Path::new("stepper.toml"), "").unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedFormat { .. }));
    }
}
