use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Directory name used under the platform configuration root.
const APP_DIR_NAME: &str = "stepper";

/// Expands a leading `~` (Unix or Windows separator) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// `~/.config/stepper` on most platforms; falls back to `./stepper`.
pub fn stepper_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde(" /tmp/stepper.json "), PathBuf::from("/tmp/stepper.json"));
    }

    #[test]
    fn tilde_prefix_expands_under_home() {
        let expanded = expand_tilde("~/stepper/config.yaml");
        assert!(expanded.ends_with("stepper/config.yaml"));
        assert!(!expanded.starts_with("~") || home_dir().is_none());
    }
}
