//! Filesystem helpers for the stepper workspace: configuration loading
//! and path expansion.

pub mod config;
pub mod path_processing;

pub use config::{CONFIG_PATH_ENV, ConfigError, LoadedSettings, load_settings};
pub use path_processing::{expand_tilde, stepper_config_dir};
