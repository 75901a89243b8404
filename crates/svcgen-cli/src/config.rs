//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SVCGEN_*` environment variables
//! 3. Config file (`--config`, or the default location if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Domain label appended to handler type names.
    pub domain: String,
    /// Sub-domain label appended to contract type names.
    pub subdomain: String,
    /// Handler output directory.
    pub out: PathBuf,
    /// Contract output directory.
    pub subdomain_out: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                domain: "Handler".into(),
                subdomain: "Service".into(),
                out: PathBuf::from("handlers/v1"),
                subdomain_out: PathBuf::from("services"),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`
    /// (or `None` to probe the default location). A missing default file is
    /// fine; a missing explicit file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()));
            }
            None => {
                builder = builder
                    .add_source(config::File::from(Self::config_path()).required(false));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SVCGEN")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.svcgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".svcgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_match_the_convention() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.domain, "Handler");
        assert_eq!(cfg.defaults.subdomain, "Service");
    }

    #[test]
    fn default_output_dirs() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.out, PathBuf::from("handlers/v1"));
        assert_eq!(cfg.defaults.subdomain_out, PathBuf::from("services"));
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.defaults.domain, "Handler");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
