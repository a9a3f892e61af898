//! Injectable engine settings
//!
//! All board dimensions and evaluation weights live here instead of in
//! file-scope constants. `Settings::default()` reproduces the classic
//! 6x7 connect-4 game searched five plies deep.

use serde::{Deserialize, Serialize};

use std::path::Path;

use crate::error::ConfigError;
use crate::{COLUMNS, DEPTH, ROWS, WINDOW_LENGTH};

/// Weight table used by the heuristic evaluator
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// A full window of the scoring side's pieces
    pub win: i32,
    /// All but one of the window are the scoring side's, the rest empty
    pub three: i32,
    /// All but two of the window are the scoring side's, the rest empty
    pub two: i32,
    /// All but one of the window are the opponent's, the rest empty
    pub opponent_three: i32,
    /// Per piece of the scoring side in the centre column
    pub center: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            win: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
            center: 3,
        }
    }
}

/// Board geometry, search depth and evaluation weights
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rows: usize,
    pub columns: usize,
    pub window_length: usize,
    pub depth: u32,
    pub weights: Weights,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            window_length: WINDOW_LENGTH,
            depth: DEPTH,
            weights: Weights::default(),
        }
    }
}

impl Settings {
    /// Parses and validates settings from a TOML document.
    ///
    /// Keys that are absent keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load settings from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy of these settings searching `depth` plies.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_length < 2 {
            return Err(ConfigError::Validation(
                "window_length must be >= 2".into(),
            ));
        }
        if self.rows < self.window_length {
            return Err(ConfigError::Validation(
                "rows must be >= window_length".into(),
            ));
        }
        if self.columns < self.window_length {
            return Err(ConfigError::Validation(
                "columns must be >= window_length".into(),
            ));
        }
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let settings = Settings::default();
        assert_eq!(settings.rows, 6);
        assert_eq!(settings.columns, 7);
        assert_eq!(settings.window_length, 4);
        assert_eq!(settings.depth, 5);
        assert_eq!(
            settings.weights,
            Weights {
                win: 100,
                three: 5,
                two: 2,
                opponent_three: -4,
                center: 3,
            }
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let settings = Settings::from_toml_str(
            r#"
            depth = 3

            [weights]
            center = 4
            "#,
        )
        .unwrap();
        assert_eq!(settings.depth, 3);
        assert_eq!(settings.weights.center, 4);
        assert_eq!(settings.weights.three, 5);
        assert_eq!(settings.rows, 6);
    }

    #[test]
    fn sample_config_file_parses() {
        let settings = Settings::from_toml_str(include_str!("../connect4.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn rejects_window_longer_than_board() {
        let err = Settings::from_toml_str("rows = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Settings::from_toml_str("depth = 0").unwrap_err();
        assert_eq!(err.to_string(), "config validation error: depth must be >= 1");
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Settings::from_toml_str("rows = \"six\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings =
            Settings::load_or_default(Path::new("does/not/exist/connect4.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
