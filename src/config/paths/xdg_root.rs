//! XDG Base Directory utilities for configuration lookup.

use std::path::{Path, PathBuf};

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
/// `None` when neither variable is set.
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Global config file path under `config_home`.
pub fn config_path_in(config_home: &Path) -> PathBuf {
    config_home.join("filecrc").join("config.toml")
}

pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|home| config_path_in(&home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = config_path_in(Path::new("/home/user/.config"));
        assert_eq!(path, PathBuf::from("/home/user/.config/filecrc/config.toml"));
    }
}
