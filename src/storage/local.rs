//! Local filesystem export storage.
//!
//! Files are written atomically: the document goes to a temporary file that
//! is renamed into place. The temporary file is owned by a guard that
//! removes it on drop unless the rename succeeded, so a failed write never
//! leaves a partial file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::services::IcsArtifact;
use crate::storage::{ExportSink, SavedExport};

/// Local filesystem export directory.
#[derive(Debug, Clone)]
pub struct LocalExportDir {
    root_dir: PathBuf,
}

impl LocalExportDir {
    /// Create an export directory handle rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Full path for a file name, rejecting anything that is not a plain name.
    fn path(&self, file_name: &str) -> Result<PathBuf> {
        let is_plain = Path::new(file_name)
            .file_name()
            .is_some_and(|name| name == file_name);
        if !is_plain {
            return Err(AppError::validation(format!(
                "export file name '{file_name}' is not a plain file name"
            )));
        }
        Ok(self.root_dir.join(file_name))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(file_name)?;
        tokio::fs::create_dir_all(&self.root_dir).await?;

        let temp = TempFile::new(path.with_extension("ics.tmp"));
        let mut file = tokio::fs::File::create(temp.path()).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(temp.path(), &path).await?;
        temp.persisted();
        Ok(path)
    }
}

#[async_trait]
impl ExportSink for LocalExportDir {
    async fn save(&self, artifact: &IcsArtifact) -> Result<SavedExport> {
        let bytes = artifact.content.as_bytes();
        let path = self.write_bytes(&artifact.file_name, bytes).await?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(SavedExport {
            location: path.display().to_string(),
            bytes: bytes.len(),
            timestamp: Utc::now(),
        })
    }
}

/// Temporary file removed on drop unless it was renamed into place.
struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            persisted: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn persisted(mut self) {
        self.persisted = true;
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.persisted {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to remove {}: {}", self.path.display(), e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(name: &str, content: &str) -> IcsArtifact {
        IcsArtifact {
            file_name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalExportDir::new(tmp.path().join("exports"));

        let saved = storage
            .save(&artifact("camp-booking.ics", "BEGIN:VCALENDAR\r\n"))
            .await
            .unwrap();

        assert_eq!(saved.bytes, 17);
        let written = std::fs::read_to_string(tmp.path().join("exports/camp-booking.ics")).unwrap();
        assert_eq!(written, "BEGIN:VCALENDAR\r\n");
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalExportDir::new(tmp.path());

        storage.save(&artifact("a-booking.ics", "x")).await.unwrap();
        storage.save(&artifact("a-booking.ics", "y")).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["a-booking.ics"]);
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("a-booking.ics")).unwrap(),
            "y"
        );
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalExportDir::new(tmp.path());

        assert!(storage.save(&artifact("../evil.ics", "x")).await.is_err());
        assert!(storage.save(&artifact("a/b.ics", "x")).await.is_err());
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x.ics.tmp");
        std::fs::write(&path, "partial").unwrap();

        drop(TempFile::new(path.clone()));
        assert!(!path.exists());
    }

    #[test]
    fn test_persisted_temp_file_is_kept() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x.ics");
        std::fs::write(&path, "done").unwrap();

        TempFile::new(path.clone()).persisted();
        assert!(path.exists());
    }
}
