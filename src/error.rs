//! Crate-level error types.

use std::fmt;

/// Errors produced by the reactor-view crate.
#[derive(Debug)]
pub enum ReactorError {
    /// A part could not be resolved by the asset loader.
    AssetLoad {
        /// Name of the part that was requested.
        part: String,
        /// Loader-provided reason.
        reason: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Asset manifest could not be parsed.
    ManifestParse(String),
    /// Options parsed but describe an unusable assembly.
    InvalidOptions(String),
    /// Loaded parts do not form a valid assembly.
    InvalidAssembly(String),
}

impl ReactorError {
    /// Shorthand for an [`AssetLoad`](Self::AssetLoad) error.
    pub fn asset_load(part: &str, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            part: part.to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ReactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { part, reason } => {
                write!(f, "failed to load part '{part}': {reason}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ManifestParse(msg) => {
                write!(f, "asset manifest parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::InvalidAssembly(msg) => {
                write!(f, "invalid assembly: {msg}")
            }
        }
    }
}

impl std::error::Error for ReactorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReactorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_part() {
        let err = ReactorError::asset_load("lid", "file not found");
        assert_eq!(err.to_string(), "failed to load part 'lid': file not found");
    }

    #[test]
    fn manifest_errors_read_as_assets() {
        let err = ReactorError::ManifestParse("expected a table".to_owned());
        assert_eq!(err.to_string(), "asset manifest parse error: expected a table");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = ReactorError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(err.source().is_some());
    }
}
