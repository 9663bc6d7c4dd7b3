//! Error types for Etymograph operations.
//!
//! Parsing the notation never fails, so [`EtymographError`] only covers the
//! stages around it: reading input, hashing labels, and exporting.

use std::io;

use thiserror::Error;

use etymograph_core::identifier::HashError;

use crate::export;

/// The main error type for Etymograph operations.
#[derive(Debug, Error)]
pub enum EtymographError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<export::Error> for EtymographError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::Style(message) => Self::Config(message),
            other => Self::Export(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_errors_become_config_errors() {
        let err = EtymographError::from(export::Error::Style("bad color".to_string()));
        assert!(matches!(err, EtymographError::Config(ref msg) if msg == "bad color"));
    }

    #[test]
    fn test_render_errors_stay_export_errors() {
        let err = EtymographError::from(export::Error::Render("boom".to_string()));
        assert!(matches!(err, EtymographError::Export(_)));
        assert_eq!(err.to_string(), "Export error: Render error: boom");
    }

    #[test]
    fn test_hash_error_display() {
        let err = EtymographError::from(HashError::new("problem", "unavailable"));
        assert!(err.to_string().starts_with("Hash error:"));
    }
}
