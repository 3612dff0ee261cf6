use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error at '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .path.display())]
    NotFoundError { path: PathBuf },

    #[error("Invalid shop data in '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid item {field} '{value}': {reason}")]
    InvalidItemError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data read back from '{}' differs from what was written", .path.display())]
    RoundTripMismatchError { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    NotFound,
    Data,
    Io,
}

impl CatalogError {
    /// Maps an I/O failure on `path` onto the catalogue taxonomy, splitting
    /// out missing files from other I/O errors.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFoundError { path }
        } else {
            CatalogError::IoError { path, source }
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CatalogError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::NotFoundError { .. } => ErrorCategory::NotFound,
            CatalogError::ParseError { .. }
            | CatalogError::SerializationError(_)
            | CatalogError::InvalidItemError { .. }
            | CatalogError::RoundTripMismatchError { .. } => ErrorCategory::Data,
            CatalogError::IoError { .. } => ErrorCategory::Io,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::NotFound => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Io => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_io_splits_not_found() {
        let err = CatalogError::from_io("missing.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, CatalogError::NotFoundError { .. }));
        assert_eq!(err.exit_code(), 2);

        let err = CatalogError::from_io(
            "locked.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, CatalogError::IoError { .. }));
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::NotFoundError {
            path: PathBuf::from("data/ShopData.json"),
        };
        assert_eq!(err.to_string(), "File not found: data/ShopData.json");

        let err = CatalogError::InvalidItemError {
            field: "price".to_string(),
            value: "-1".to_string(),
            reason: "Price cannot be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid item price '-1': Price cannot be negative"
        );
        assert_eq!(err.exit_code(), 3);
    }
}
