//! Path management for barber-cli
//!
//! ## Path Resolution Order
//!
//! 1. `BARBER_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `barber-cli` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BarberError;

/// Manages all paths used by barber-cli
#[derive(Debug, Clone)]
pub struct BarberPaths {
    /// Base directory for all barber-cli files
    base_dir: PathBuf,
}

impl BarberPaths {
    /// Create a new BarberPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BarberError> {
        let base_dir = if let Ok(custom) = std::env::var("BARBER_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "barber-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BarberError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create BarberPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Access token and its expiry
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Refresh token, stored apart from the access token
    pub fn refresh_token_file(&self) -> PathBuf {
        self.base_dir.join("refresh_token.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BarberError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BarberError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BarberPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
        assert_eq!(
            paths.refresh_token_file(),
            temp_dir.path().join("refresh_token.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("BARBER_CLI_DATA_DIR", custom_path);
        let paths = BarberPaths::new().unwrap();
        env::remove_var("BARBER_CLI_DATA_DIR");

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("barber");
        let paths = BarberPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
