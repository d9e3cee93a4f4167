//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/msgcomp/msgcomp.toml`
//! 3. Local config: `<layout_dir>/.msgcomp.toml` (directory of the layout being built)
//! 4. Environment variables: `MSGCOMP_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, ButtonStyle};

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub layout_dir: Option<PathBuf>,
    pub pretty: Option<bool>,
    pub default_style: Option<ButtonStyle>,
}

/// Unified configuration for msgcomp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for bare layout names (default: ~/.config/msgcomp/layouts)
    pub layout_dir: PathBuf,
    /// Pretty-print JSON payloads
    pub pretty: bool,
    /// Style for layout buttons that do not name one
    pub default_style: ButtonStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout_dir: default_layout_dir(),
            pretty: true,
            default_style: ButtonStyle::Primary,
        }
    }
}

fn default_layout_dir() -> PathBuf {
    global_config_dir()
        .map(|dir| dir.join("layouts"))
        .unwrap_or_else(|| PathBuf::from("~/.config/msgcomp/layouts"))
}

/// Get the XDG config directory for msgcomp.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "msgcomp").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("msgcomp.toml"))
}

/// Get the path to the local config file next to a layout.
pub fn local_config_path(layout_dir: &Path) -> PathBuf {
    layout_dir.join(".msgcomp.toml")
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

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.layout_dir.to_string_lossy().as_ref());
        self.layout_dir = PathBuf::from(expanded);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            layout_dir: overlay
                .layout_dir
                .clone()
                .unwrap_or_else(|| self.layout_dir.clone()),
            pretty: overlay.pretty.unwrap_or(self.pretty),
            default_style: overlay.default_style.unwrap_or(self.default_style),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `layout_dir` - Directory of the layout being processed, for local config
    pub fn load(layout_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = layout_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply MSGCOMP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("MSGCOMP").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("layout_dir") {
            settings.layout_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("pretty") {
            settings.pretty = val;
        }
        if let Ok(val) = config.get_string("default_style") {
            settings.default_style =
                val.parse::<ButtonStyle>()
                    .map_err(|message| ApplicationError::Config {
                        message: format!("MSGCOMP_DEFAULT_STYLE: {message}"),
                    })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# msgcomp configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/msgcomp/msgcomp.toml   (your baseline)
#   Local:  <layout dir>/.msgcomp.toml       (per layout directory)
#   Env:    MSGCOMP_* environment variables   (explicit overrides)

# Directory searched for bare layout names (`msgcomp build welcome`)
# layout_dir = "~/.config/msgcomp/layouts"

# Pretty-print JSON payloads
# pretty = true

# Style for buttons that do not name one: primary, secondary, success, danger, link
# default_style = "primary"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings {
            layout_dir: PathBuf::from("/base"),
            pretty: true,
            default_style: ButtonStyle::Primary,
        };
        let overlay = RawSettings {
            layout_dir: None,
            pretty: Some(false),
            default_style: Some(ButtonStyle::Secondary),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.layout_dir, PathBuf::from("/base"));
        assert!(!merged.pretty);
        assert_eq!(merged.default_style, ButtonStyle::Secondary);
    }

    #[test]
    fn given_tilde_in_layout_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            layout_dir: PathBuf::from("~/layouts"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
            .expect("home dir");
        assert!(
            settings.layout_dir.to_string_lossy().starts_with(&home),
            "layout_dir should start with home dir: {}",
            settings.layout_dir.display()
        );
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.layout_dir.is_none());
    }

    #[test]
    fn given_settings_when_to_toml_then_round_trips() {
        let settings = Settings::default();
        let rendered = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, settings);
    }
}
