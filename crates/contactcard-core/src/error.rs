//! Error types for contact card operations

use thiserror::Error;

/// Main error type for contact card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Element id does not name a form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Share endpoint is not an absolute http(s) URL without query or fragment
    #[error("Invalid share endpoint: {0}")]
    InvalidEndpoint(String),

    /// Malformed data URL
    #[error("Invalid data URL: {0}")]
    DataUrl(String),

    /// Data does not fit into a QR code
    #[error("QR encoding error: {0}")]
    QrEncoding(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Export file could not be delivered
    #[error("Download error: {0}")]
    Download(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::UnknownField("fax".to_string());
        assert_eq!(format!("{}", err), "Unknown field: fax");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
