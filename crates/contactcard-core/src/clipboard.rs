//! Copying share links to the system clipboard

use crate::error::CardResult;

/// Acknowledgment shown after a successful copy
pub const COPY_ACK: &str = "QR link copied to clipboard!";

/// System clipboard seam
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> CardResult<()>;
}

/// Write `text` and report whether the user should be acknowledged.
///
/// Failures are logged and otherwise swallowed: the user only ever sees the
/// success acknowledgment.
pub fn copy_text(clipboard: &mut dyn ClipboardWriter, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::info!(len = text.len(), "Share link copied");
            true
        }
        Err(e) => {
            tracing::warn!("Clipboard not available: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    struct Denied;

    impl ClipboardWriter for Denied {
        fn write_text(&mut self, _text: &str) -> CardResult<()> {
            Err(CardError::Clipboard("permission denied".to_string()))
        }
    }

    struct Recording(Vec<String>);

    impl ClipboardWriter for Recording {
        fn write_text(&mut self, text: &str) -> CardResult<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success() {
        let mut clipboard = Recording(Vec::new());
        assert!(copy_text(&mut clipboard, "https://example.com"));
        assert_eq!(clipboard.0, vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_copy_failure_is_silent() {
        assert!(!copy_text(&mut Denied, "https://example.com"));
    }
}
