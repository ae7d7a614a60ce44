// src/infrastructure/storage.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ImageStorage, UploadedImage},
};
use crate::domain::value_objects::UPLOADS_PREFIX;

/// Writes uploaded images into a local directory served at `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn ensure_root(&self) -> ApplicationResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("create upload dir: {err}")))
    }

    /// Map a `/uploads/<file>` path back onto the upload directory.
    fn local_path(&self, public_path: &str) -> Option<PathBuf> {
        let file_name = public_path.strip_prefix(UPLOADS_PREFIX)?;
        let is_plain_file = Path::new(file_name)
            .file_name()
            .is_some_and(|name| name == file_name);
        is_plain_file.then(|| self.root.join(file_name))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, image: UploadedImage) -> ApplicationResult<String> {
        let ext = image.extension().ok_or_else(|| {
            ApplicationError::infrastructure(format!(
                "refusing to store upload with content type {:?}",
                image.content_type
            ))
        })?;
        let file_name = format!("{}.{ext}", Uuid::new_v4());
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, &image.bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("store upload: {err}")))?;

        tracing::debug!(
            path = %path.display(),
            client_name = ?image.file_name,
            bytes = image.bytes.len(),
            "stored uploaded image"
        );
        Ok(format!("{UPLOADS_PREFIX}{file_name}"))
    }

    async fn discard(&self, public_path: &str) -> ApplicationResult<()> {
        let path = self.local_path(public_path).ok_or_else(|| {
            ApplicationError::infrastructure(format!("not a stored upload: {public_path}"))
        })?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "discarded uploaded image");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!("discard upload: {err}"))),
        }
    }
}
