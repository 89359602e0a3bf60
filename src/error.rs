use thiserror::Error;

/// Main error type for the menu sheet crate.
/// Aggregates errors from the standard library, dependencies, and internal modules.
///
/// Only configuration and source loading can fail; the parsing pipeline itself
/// degrades instead of returning errors.
#[derive(Error, Debug)]
pub enum MenuSheetError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    // Module errors
    #[error("{0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("{0}")]
    SourceError(#[from] crate::helpers::reader::SourceError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, MenuSheetError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| MenuSheetError::WithContextError(format!("{}: {}", message, e)))
    }
}
