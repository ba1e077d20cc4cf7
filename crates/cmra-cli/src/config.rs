//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `CMRA__` (`CMRA__INSTALL__PROGRAM=pnpm`)
//! 3. Config file (`--config FILE`, else `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CMRA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Dependency installation.
    pub install: InstallConfig,
    /// Version control.
    pub vcs: VcsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template preselected in the interactive picker.
    pub template: Option<String>,
    /// Directory new projects are created in.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    pub program: String,
    pub args: Vec<String>,
    pub skip: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: "npm".into(),
            args: vec!["install".into()],
            skip: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Run `git init` and an initial commit after installing.
    pub init: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, env_source())
    }

    fn load_with(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-my-react-app.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cmra", "create-my-react-app")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-my-react-app.toml"))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(" ")
        .with_list_parse_key("install.args")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    fn missing_file() -> PathBuf {
        PathBuf::from("/nonexistent/cmra/config.toml")
    }

    #[test]
    fn defaults_install_with_npm() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.install.program, "npm");
        assert_eq!(cfg.install.args, ["install"]);
        assert!(!cfg.install.skip);
        assert!(!cfg.vcs.init);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = missing_file();
        assert!(AppConfig::load_with(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ntemplate = \"with-router\"\n\n[install]\nprogram = \"pnpm\"\n\n[vcs]\ninit = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("with-router"));
        assert_eq!(cfg.install.program, "pnpm");
        assert_eq!(cfg.install.args, ["install"]);
        assert!(cfg.vcs.init);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[install]\nprogram = \"pnpm\"\n").unwrap();

        let cfg = AppConfig::load_with(
            Some(&path),
            env(&[
                ("CMRA__INSTALL__PROGRAM", "yarn"),
                ("CMRA__INSTALL__SKIP", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.install.program, "yarn");
        assert!(cfg.install.skip);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[install\nprogram = ").unwrap();

        assert!(AppConfig::load_with(Some(&path), env(&[])).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
