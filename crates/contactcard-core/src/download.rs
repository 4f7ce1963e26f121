//! Delivering exported files to the user

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CardError, CardResult};
use crate::vcard::ExportFile;

/// Somewhere an [`ExportFile`] can be handed over
pub trait DownloadSink {
    /// Deliver the file and return where it ended up
    fn deliver(&mut self, file: &ExportFile) -> CardResult<PathBuf>;
}

/// Writes exports into a directory under their own file name.
///
/// The contents are staged in a temporary file next to the target and
/// persisted in one step; the staging handle never outlives `deliver`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file: &ExportFile) -> CardResult<PathBuf> {
        let name = Path::new(&file.file_name);
        if name.file_name() != Some(name.as_os_str()) {
            return Err(CardError::Download(format!(
                "refusing to write outside the download directory: {}",
                file.file_name
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(name);

        let mut staged = tempfile::NamedTempFile::new_in(&self.dir)?;
        staged.write_all(&file.contents)?;
        staged.flush()?;
        // A failed persist hands the temp file back; dropping it removes it.
        staged
            .persist(&target)
            .map_err(|e| CardError::Download(format!("{}: {}", target.display(), e.error)))?;

        tracing::info!(path = %target.display(), bytes = file.contents.len(), "Delivered {}", file.mime);
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vcf(contents: &str) -> ExportFile {
        ExportFile {
            file_name: "contact.vcf".to_string(),
            mime: "text/vcard".to_string(),
            contents: contents.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_deliver_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());

        let path = sink.deliver(&vcf("BEGIN:VCARD")).unwrap();
        assert_eq!(path, dir.path().join("contact.vcf"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "BEGIN:VCARD");

        // Only the delivered file remains; the staging file is gone.
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_deliver_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.deliver(&vcf("one")).unwrap();
        let path = sink.deliver(&vcf("two")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "two");
    }

    #[test]
    fn test_deliver_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("downloads").join("cards");
        let mut sink = DirectorySink::new(&nested);
        let path = sink.deliver(&vcf("x")).unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_rejects_path_in_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let mut file = vcf("x");
        file.file_name = "../escape.vcf".to_string();
        assert!(matches!(sink.deliver(&file), Err(CardError::Download(_))));
    }
}
