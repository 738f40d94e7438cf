// User configuration and platform paths.
// Loads an optional JSON config file and resolves the log file location.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TradeFlowError};

/// Default accent color, a light olive green.
pub const DEFAULT_ACCENT: &str = "#C6D870";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tradeflow")
}

/// Path to the default config file (~/.config/tradeflow/config.json on Linux).
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accent color, any string ratatui's `Color` parses (`"#C6D870"`, `"yellow"`).
    pub accent: String,
    /// Style classification passed through from the host, shown in the status bar.
    pub class_name: Option<String>,
    pub show_status_bar: bool,
    /// Enable mouse capture so tab titles can be clicked.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT.to_string(),
            class_name: None,
            show_status_bar: true,
            mouse: true,
        }
    }
}

impl Config {
    /// Load from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        // Fail early on a bad accent instead of at first draw.
        config.accent_color()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the platform config directory.
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or(TradeFlowError::NoConfigDir)?;
        Self::load_from(&path)
    }

    pub fn accent_color(&self) -> Result<Color> {
        Color::from_str(&self.accent).map_err(|_| TradeFlowError::InvalidColor {
            value: self.accent.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.accent_color().unwrap(), Color::Rgb(0xC6, 0xD8, 0x70));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "accent": "yellow", "class_name": "py-16" }}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.accent_color().unwrap(), Color::Yellow);
        assert_eq!(config.class_name.as_deref(), Some("py-16"));
        assert!(config.show_status_bar);
        assert!(config.mouse);
    }

    #[test]
    fn test_invalid_accent_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "accent": "not-a-color" }}"#).unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, TradeFlowError::InvalidColor { .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ accent").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, TradeFlowError::Json(_)));
    }

    #[test]
    fn test_config_paths() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.json"));
        }
    }
}
