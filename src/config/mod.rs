// Configuration
// Host-tunable knobs loaded from the platform config dir; missing file or
// missing keys fall back to defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Country codes for the public-holiday overlay.
    pub holiday_countries: Vec<String>,
    /// Hour row height in pixels for the time-grid views.
    pub hour_cell_height: f32,
    /// Now-indicator refresh cadence in seconds.
    pub now_tick_secs: u64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            holiday_countries: vec!["US".to_string()],
            hour_cell_height: crate::services::grid::time_grid::DEFAULT_HOUR_HEIGHT,
            now_tick_secs: crate::services::clock::DEFAULT_TICK_SECS,
        }
    }
}

impl CalendarConfig {
    /// Load from the platform config dir (`gridcal/config.toml`), defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gridcal").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.holiday_countries, vec!["US".to_string()]);
        assert_eq!(config.now_tick_secs, 60);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "holiday_countries = [\"AU\", \"NZ\"]\nnow_tick_secs = 30"
        )
        .unwrap();

        let config = CalendarConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config.holiday_countries,
            vec!["AU".to_string(), "NZ".to_string()]
        );
        assert_eq!(config.now_tick_secs, 30);
        // Unset key keeps its default.
        assert_eq!(config.hour_cell_height, 72.0);
    }

    #[test]
    fn test_load_from_bad_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "holiday_countries = not-a-list").unwrap();
        assert!(CalendarConfig::load_from(file.path()).is_err());
    }
}
