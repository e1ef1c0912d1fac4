//! Optional on-disk copy of every rendered document.
//!
//! Files are named after the render id, so concurrent renders never write to
//! the same path.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Somewhere rendered PDFs are kept after being streamed back.
#[async_trait]
pub trait DocumentArchive: Send + Sync {
    /// Stores `bytes` under `render_id` and returns a locator for logs.
    async fn store(&self, render_id: Uuid, bytes: &[u8]) -> Result<String, AppError>;
}

/// Writes `<dir>/<render_id>.pdf`.
#[derive(Debug, Clone)]
pub struct DiskArchive {
    dir: PathBuf,
}

impl DiskArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DiskArchive { dir: dir.into() }
    }

    pub fn path_for(&self, render_id: Uuid) -> PathBuf {
        self.dir.join(format!("{render_id}.pdf"))
    }
}

#[async_trait]
impl DocumentArchive for DiskArchive {
    async fn store(&self, render_id: Uuid, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Storage(format!(
                "cannot create archive directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path_for(render_id);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", path.display())))?;

        info!(%render_id, path = %path.display(), bytes = bytes.len(), "Archived rendered PDF");
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_writes_file_named_after_render_id() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = DiskArchive::new(tmp.path().join("nested").join("pdfs"));
        let id = Uuid::new_v4();

        let location = archive.store(id, b"%PDF-1.4 test").await.unwrap();

        let expected = archive.path_for(id);
        assert_eq!(location, expected.display().to_string());
        assert_eq!(std::fs::read(&expected).unwrap(), b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_distinct_render_ids_never_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = DiskArchive::new(tmp.path());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        archive.store(a, b"first").await.unwrap();
        archive.store(b, b"second").await.unwrap();

        assert_eq!(std::fs::read(archive.path_for(a)).unwrap(), b"first");
        assert_eq!(std::fs::read(archive.path_for(b)).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_unwritable_directory_is_a_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let archive = DiskArchive::new(blocker.join("pdfs"));
        let err = archive.store(Uuid::new_v4(), b"x").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)), "got {err:?}");
    }
}
