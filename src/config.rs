//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/pawclinic/pawclinic.toml`
//! 3. Environment variables: `PAWCLINIC_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-tunable settings for the console frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `chrono` format string used to parse and print appointment dates.
    pub date_format: String,
    /// Ask for confirmation before removing records.
    pub confirm_removals: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            confirm_removals: true,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// A missing global config file is not an error; defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("PAWCLINIC"));

        builder.build()?.try_deserialize()
    }

    /// Path to the global config file, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pawclinic").map(|dirs| dirs.config_dir().join("pawclinic.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_day_month_year_and_confirmation() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert!(settings.confirm_removals);
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        // No global file and no PAWCLINIC_* variables: the layered load
        // must fall back to the compiled defaults.
        let settings = Settings::load().unwrap();
        assert_eq!(settings, Settings::default());
    }
}
