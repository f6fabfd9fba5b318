//! Configuration loader with multi-source merging

use crate::{CharstepConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "CHARSTEP".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "CHARSTEP")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/charstep/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<CharstepConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = CharstepConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/charstep/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                builder = add_file(builder, user_config_file);
            }
        }

        // 3. Project config (charstep.toml)
        builder = add_file(builder, Paths::project_config_file(&self.project_dir));

        // 4. Local config (charstep.local.toml, gitignored)
        builder = add_file(builder, Paths::local_config_file(&self.project_dir));

        // 5. Environment variables (CHARSTEP_RANGE__COUNT=3)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let charstep_config: CharstepConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        charstep_config.validate()?;

        Ok(charstep_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn add_file(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    path: PathBuf,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    if !path.exists() {
        return builder;
    }

    debug!(path = %path.display(), "adding config file");
    builder.add_source(
        config::File::from(path)
            .required(false)
            .format(config::FileFormat::Toml),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn loader(project_dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("CHARSTEP_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config, CharstepConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[range]
lower = "0"
upper = "4"
count = 3

[echo]
stride = 5

[output]
color = false
"#;
        fs::write(project_dir.join("charstep.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.range.lower, '0');
        assert_eq!(config.range.upper, '4');
        assert_eq!(config.range.count, 3);
        assert_eq!(config.echo.stride, 5);
        assert_eq!(config.echo.count, 4);
        assert!(!config.output.color);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("charstep.toml"),
            r#"
[echo]
precision = 3
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("charstep.local.toml"),
            r#"
[echo]
precision = 1
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.echo.precision, 1);
    }

    #[test]
    fn test_invalid_config_fails_to_load() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("charstep.toml"),
            r#"
[range]
lower = "Z"
upper = "A"
"#,
        )
        .expect("Failed to write config");

        let err = loader(project_dir).load().unwrap_err();
        assert!(err.to_string().contains("range.lower"));
    }

    // Environment overrides (CHARSTEP_RANGE__COUNT=3 and friends) are exercised
    // end to end by the CLI tests, which can set variables per child process.
}
