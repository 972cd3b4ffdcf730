//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>` or `$XDG_CONFIG_HOME/mansion/mansion.toml`
//! 3. Environment variables: `MANSION_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Label shown for rooms without a name.
pub const DEFAULT_UNNAMED_LABEL: &str = "(sem nome)";

/// Unified configuration for mansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Label shown for rooms without a name (default: "(sem nome)")
    pub unnamed_label: String,
    /// Maximum number of levels in a manual build, at least 1 (default: unbounded)
    pub max_depth: Option<NonZeroUsize>,
    /// Print the mansion map before exploring
    pub show_map: bool,
    /// Print the visited rooms after exploring
    pub show_trail: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unnamed_label: DEFAULT_UNNAMED_LABEL.into(),
            max_depth: None,
            show_map: false,
            show_trail: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub unnamed_label: Option<String>,
    pub max_depth: Option<NonZeroUsize>,
    pub show_map: Option<bool>,
    pub show_trail: Option<bool>,
}

/// Get the XDG config directory for mansion.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mansion").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mansion.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn invalid_env(key: &str, value: &str, reason: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Config {
        message: format!("MANSION_{}={}: {}", key.to_uppercase(), value, reason),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            unnamed_label: overlay
                .unnamed_label
                .clone()
                .unwrap_or_else(|| self.unnamed_label.clone()),
            max_depth: overlay.max_depth.or(self.max_depth),
            show_map: overlay.show_map.unwrap_or(self.show_map),
            show_trail: overlay.show_trail.unwrap_or(self.show_trail),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist when given.
    ///   Without it the global XDG file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("loading global config: {}", global_path.display());
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        debug!("settings: {:?}", current);
        Ok(current)
    }

    /// Apply MANSION_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MANSION")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("unnamed_label") {
            settings.unnamed_label = val;
        }
        if let Ok(val) = config.get_string("max_depth") {
            settings.max_depth = if val.is_empty() {
                None
            } else {
                Some(
                    val.parse()
                        .map_err(|e| invalid_env("max_depth", &val, e))?,
                )
            };
        }
        if let Ok(val) = config.get_string("show_map") {
            settings.show_map = parse_bool("show_map", &val)?;
        }
        if let Ok(val) = config.get_string("show_trail") {
            settings.show_trail = parse_bool("show_trail", &val)?;
        }

        Ok(settings)
    }

    /// Render settings as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ApplicationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid_env(key, value, "expected a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn given_defaults_when_created_then_unbounded_and_quiet() {
        let settings = Settings::default();
        assert_eq!(settings.unnamed_label, "(sem nome)");
        assert_eq!(settings.max_depth, None);
        assert!(!settings.show_map);
        assert!(!settings.show_trail);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings {
            show_map: true,
            ..Settings::default()
        };
        let overlay = RawSettings {
            max_depth: NonZeroUsize::new(4),
            ..RawSettings::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.max_depth, NonZeroUsize::new(4));
        assert!(merged.show_map);
        assert_eq!(merged.unnamed_label, DEFAULT_UNNAMED_LABEL);
    }

    #[rstest]
    #[case("true", true)]
    #[case("YES", true)]
    #[case("1", true)]
    #[case("off", false)]
    #[case("false", false)]
    fn given_boolean_text_when_parsing_then_accepts_common_spellings(
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(parse_bool("show_map", value).unwrap(), expected);
    }

    #[test]
    fn given_garbage_when_parsing_bool_then_errors_with_variable_name() {
        let err = parse_bool("show_map", "maybe").unwrap_err();
        assert!(err.to_string().contains("MANSION_SHOW_MAP=maybe"));
    }

    #[test]
    fn given_settings_when_rendering_toml_then_reloads_identically() {
        let settings = Settings {
            unnamed_label: "?".into(),
            max_depth: NonZeroUsize::new(3),
            show_map: true,
            show_trail: false,
        };
        let rendered = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&rendered).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
