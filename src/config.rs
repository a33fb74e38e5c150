// src/config.rs
//! Local configuration (`coursetree.toml`).
//!
//! Loading is lenient: a missing or malformed file falls back to defaults
//! so the tool always starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILE: &str = "coursetree.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Seed file used when no `--seed` flag is given. Falls back to the
    /// built-in curriculum when absent.
    pub seed: Option<PathBuf>,
    /// Whether simulation mode starts enabled.
    pub simulation: Option<bool>,
    /// Disable colored output.
    pub plain: Option<bool>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `coursetree.toml` from the working directory, falling back to
    /// defaults if it is missing or invalid.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }

    #[must_use]
    pub fn simulation_enabled(&self) -> bool {
        self.simulation.unwrap_or(true)
    }

    #[must_use]
    pub fn plain_output(&self) -> bool {
        self.plain.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let config = Config::load_from(Path::new("does/not/exist.toml"));
        assert!(config.seed.is_none());
        assert!(config.simulation_enabled());
        assert!(!config.plain_output());
    }

    #[test]
    fn test_parse_fields() {
        let config: Config =
            toml::from_str("seed = \"curriculum.toml\"\nsimulation = false\nplain = true\n")
                .unwrap();
        assert_eq!(config.seed.as_deref(), Some(Path::new("curriculum.toml")));
        assert!(!config.simulation_enabled());
        assert!(config.plain_output());
    }
}
