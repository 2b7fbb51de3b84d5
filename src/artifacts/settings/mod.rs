//! Settings file loading
//!
//! Settings come from a YAML file resolved in this order: an explicit
//! `--config` path, the `FILEDIFF_CONFIG` environment variable, then
//! `$HOME/.filediff.yaml`. The raw file passes through `${VAR}`
//! substitution before deserialization, and `FILEDIFF_COLOR` overrides
//! the parsed value afterwards. None of the settings affect the
//! comparison itself, only the report.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "FILEDIFF_CONFIG";
pub const COLOR_VAR: &str = "FILEDIFF_COLOR";

const HOME_SETTINGS_FILE: &str = ".filediff.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the report is color-coded when stdout is a terminal.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { color: true }
    }
}

impl Settings {
    /// Loads the settings. An explicit path must exist and parse; the
    /// fallback locations are allowed to be absent.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut settings = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else {
            match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            }
        };

        settings.apply_env_overrides();

        Ok(settings)
    }

    fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(HOME_SETTINGS_FILE))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let contents = substitute_variables(&contents);

        serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(COLOR_VAR) {
            self.color = parse_bool(&value);
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Substitute `${VAR}` patterns in a string with environment variable values.
///
/// - `${VAR}` is replaced with the value of the environment variable `VAR`.
/// - `${VAR:-default}` falls back to `default` when the variable is unset.
/// - An unset variable with no default leaves the placeholder unchanged.
pub fn substitute_variables(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?}").expect("invalid regex");

    re.replace_all(input, |caps: &regex::Captures| {
        match std::env::var(&caps[1]) {
            Ok(value) => value,
            Err(_) => caps
                .get(2)
                .map(|default| default.as_str().to_string())
                .unwrap_or_else(|| caps[0].to_string()),
        }
    })
    .into_owned()
}
