//! Data URLs for the avatar preview
//!
//! Binary file content inlined as `data:<mime>;base64,<payload>`, usable
//! directly as an image source.

use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Base64 data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode bytes under the given media type
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{};base64,{}", mime, payload))
    }

    /// Encode file content, guessing the media type.
    ///
    /// Image magic bytes win over the file extension.
    pub fn from_file_bytes(path: &Path, bytes: &[u8]) -> Self {
        Self::encode(guess_mime(path, bytes), bytes)
    }

    /// Wrap an existing data URL string after checking its shape
    pub fn parse(s: &str) -> CardResult<Self> {
        let url = Self(s.to_string());
        url.split()?;
        Ok(url)
    }

    /// Media type of the payload
    pub fn mime(&self) -> &str {
        self.split().map(|(mime, _)| mime).unwrap_or(FALLBACK_MIME)
    }

    /// Decode back into media type and bytes
    pub fn decode(&self) -> CardResult<(String, Vec<u8>)> {
        let (mime, payload) = self.split()?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| CardError::DataUrl(e.to_string()))?;
        Ok((mime.to_string(), bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn split(&self) -> CardResult<(&str, &str)> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| CardError::DataUrl("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CardError::DataUrl("missing payload separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| CardError::DataUrl("only base64 payloads are supported".to_string()))?;
        Ok((mime, payload))
    }
}

impl std::fmt::Display for DataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn guess_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(image::ImageFormat::from_extension)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_encode_decode() {
        let url = DataUrl::encode("image/png", b"hello");
        assert_eq!(url.as_str(), "data:image/png;base64,aGVsbG8=");
        let (mime, bytes) = url.decode().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_guess_from_magic_bytes() {
        let url = DataUrl::from_file_bytes(Path::new("avatar.bin"), PNG_MAGIC);
        assert_eq!(url.mime(), "image/png");
        assert!(url.as_str().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_guess_from_extension() {
        let url = DataUrl::from_file_bytes(Path::new("me.JPG"), b"not really a jpeg");
        assert_eq!(url.mime(), "image/jpeg");
    }

    #[test]
    fn test_unknown_falls_back() {
        let url = DataUrl::from_file_bytes(Path::new("notes.txt"), b"plain");
        assert_eq!(url.mime(), "application/octet-stream");
    }

    #[test]
    fn test_empty_file() {
        let url = DataUrl::from_file_bytes(Path::new("empty"), b"");
        assert_eq!(url.as_str(), "data:application/octet-stream;base64,");
        assert!(url.decode().unwrap().1.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(DataUrl::parse("data:image/png;base64,aGk=").is_ok());
        assert!(DataUrl::parse("https://example.com/a.png").is_err());
        assert!(DataUrl::parse("data:image/png;base64").is_err());
        assert!(DataUrl::parse("data:text/plain,hi").is_err());
    }
}
