//! Path utilities and XDG directory discovery

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// XDG-compliant paths for charstep
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    /// Create a new Paths instance with XDG discovery
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("org", "charstep", "charstep"),
        }
    }

    /// User-wide config file, ~/.config/charstep/config.toml on Linux
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        let dirs = self.project_dirs.as_ref().ok_or_else(|| {
            ConfigError::XdgError("no home directory to place user config in".to_string())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get project config file path (charstep.toml)
    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join("charstep.toml")
    }

    /// Get local config file path (charstep.local.toml, gitignored)
    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join("charstep.local.toml")
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
