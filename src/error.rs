use std::path::PathBuf;

/// Errors raised by checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} out of range for a board with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    InvalidColumn { column: usize },

    #[error("no open row in column {column}")]
    NoOpenRow { column: usize },

    #[error("could not parse {input:?} at position {position}: {reason}")]
    Parse {
        input: String,
        position: usize,
        reason: String,
    },
}

/// Errors that can occur when loading engine settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_display() {
        let err = EngineError::ColumnOutOfRange {
            column: 9,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 out of range for a board with 7 columns"
        );
        assert_eq!(
            EngineError::InvalidColumn { column: 3 }.to_string(),
            "column 3 is full"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("depth must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: depth must be >= 1");
    }
}
