//! Platform-specific paths for binsig configuration.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/binsig/` (Linux), `~/Library/Application Support/binsig/` (macOS), `%APPDATA%\binsig\` (Windows)
//! - **Settings file**: `settings.toml` inside the user config directory

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "binsig";

/// File name of the settings file.
const SETTINGS_FILE: &str = "settings.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default settings file path.
pub fn settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_path_is_inside_config_dir() {
        let path = settings_path();
        assert!(path.starts_with(user_config_dir()));
        assert_eq!(path.file_name().unwrap(), SETTINGS_FILE);
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        assert!(user_config_dir().ends_with(APP_NAME));
    }
}
