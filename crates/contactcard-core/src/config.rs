//! Runtime configuration shared by the desktop app and the CLI

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::qr::DEFAULT_QR_SIZE;
use crate::share::ShareEndpoint;
use crate::vcard::Escaping;

/// Smallest QR size that still scans reliably
pub const MIN_QR_SIZE: u32 = 64;

/// Largest QR size accepted; the renderer's pixel arithmetic is `u32`
pub const MAX_QR_SIZE: u32 = 4096;

/// Settings for a contact card session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// "New contact" endpoint of the contacts service
    pub endpoint: ShareEndpoint,
    /// QR size in pixels (width and height)
    pub qr_size: u32,
    /// How vCard values are written
    pub escaping: Escaping,
    /// Where exported files are written
    pub download_dir: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            endpoint: ShareEndpoint::default(),
            qr_size: DEFAULT_QR_SIZE,
            escaping: Escaping::Raw,
            download_dir: default_download_dir(),
        }
    }
}

impl CardConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> CardResult<()> {
        if self.qr_size < MIN_QR_SIZE {
            return Err(CardError::Config(format!(
                "qr_size must be at least {}, got {}",
                MIN_QR_SIZE, self.qr_size
            )));
        }
        if self.qr_size > MAX_QR_SIZE {
            return Err(CardError::Config(format!(
                "qr_size must be at most {}, got {}",
                MAX_QR_SIZE, self.qr_size
            )));
        }
        Ok(())
    }

    /// Load a JSON config file and validate it
    pub fn load(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// The user's download directory, or the working directory
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.endpoint.as_str(), "https://contacts.google.com/new");
        assert_eq!(config.qr_size, 256);
        assert_eq!(config.escaping, Escaping::Raw);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_qr() {
        let config = CardConfig {
            qr_size: 8,
            ..CardConfig::default()
        };
        assert!(matches!(config.validate(), Err(CardError::Config(_))));
    }

    #[test]
    fn test_rejects_huge_qr() {
        let config = CardConfig {
            qr_size: u32::MAX,
            ..CardConfig::default()
        };
        assert!(matches!(config.validate(), Err(CardError::Config(_))));

        let largest = CardConfig {
            qr_size: MAX_QR_SIZE,
            ..CardConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_huge_qr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"qr_size": 4294967295}"#).unwrap();
        assert!(matches!(CardConfig::load(&path), Err(CardError::Config(_))));
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(
            &path,
            r#"{"endpoint": "https://contacts.example.com/new", "escaping": "rfc6350"}"#,
        )
        .unwrap();

        let config = CardConfig::load(&path).unwrap();
        assert_eq!(config.endpoint.as_str(), "https://contacts.example.com/new");
        assert_eq!(config.escaping, Escaping::Rfc6350);
        assert_eq!(config.qr_size, 256);
    }

    #[test]
    fn test_load_rejects_bad_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"endpoint": "not a url"}"#).unwrap();
        assert!(matches!(CardConfig::load(&path), Err(CardError::Serialization(_))));
    }
}
