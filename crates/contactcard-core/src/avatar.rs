//! Avatar loading
//!
//! The first selected file is read asynchronously and turned into a data
//! URL for the preview image. Loads are never cancelled: when the user
//! picks a second file before the first read finishes, both complete and
//! the preview shows whichever completion is applied last.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CardResult;
use crate::types::DataUrl;

/// First file of a selection, if any
pub fn first_selected(files: &[PathBuf]) -> Option<&Path> {
    files.first().map(PathBuf::as_path)
}

/// Read a file and encode it as a data URL
pub async fn load_data_url(path: &Path) -> CardResult<DataUrl> {
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Avatar read");
    Ok(DataUrl::from_file_bytes(path, &bytes))
}

/// Sequence numbers for in-flight avatar loads.
///
/// Only used to report overtaken loads in logs; every completion is still
/// applied.
#[derive(Debug, Default)]
pub struct AvatarLoads {
    started: AtomicU64,
}

impl AvatarLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new load and return its sequence number (starting at 1)
    pub fn begin(&self) -> u64 {
        self.started.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `seq` is the most recently started load
    pub fn is_latest(&self, seq: u64) -> bool {
        self.started.load(Ordering::SeqCst) == seq
    }

    /// Number of loads started so far
    pub fn started(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    /// Record the completion of load `seq`; returns whether it was the latest.
    /// An overtaken load is logged and still applied by the caller.
    pub fn finish(&self, seq: u64) -> bool {
        let latest = self.is_latest(seq);
        if !latest {
            tracing::debug!(
                seq,
                started = self.started(),
                "Avatar load overtaken by a newer selection"
            );
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_selected() {
        assert!(first_selected(&[]).is_none());
        let files = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        assert_eq!(first_selected(&files), Some(Path::new("a.png")));
    }

    #[test]
    fn test_sequence() {
        let loads = AvatarLoads::new();
        let first = loads.begin();
        let second = loads.begin();
        assert_eq!((first, second), (1, 2));
        assert!(!loads.is_latest(first));
        assert!(loads.is_latest(second));
        assert_eq!(loads.started(), 2);
    }

    #[test]
    fn test_finish_reports_overtaken_loads() {
        let loads = AvatarLoads::new();
        let first = loads.begin();
        let second = loads.begin();

        // Completion order is independent of start order
        assert!(loads.finish(second));
        assert!(!loads.finish(first));
        assert_eq!(loads.started(), 2);
    }

    #[tokio::test]
    async fn test_load_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.gif");
        let bytes = b"GIF89a\x01\x00\x01\x00".to_vec();
        std::fs::write(&path, &bytes).unwrap();

        let url = load_data_url(&path).await.unwrap();
        assert!(url.as_str().starts_with("data:image/gif;base64,"));
        assert_eq!(url.decode().unwrap().1, bytes);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_data_url(Path::new("/definitely/not/here.png")).await.unwrap_err();
        assert!(matches!(err, crate::error::CardError::Io(_)));
    }
}
