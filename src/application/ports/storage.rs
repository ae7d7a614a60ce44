// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Content types accepted for product photos and the extension each is
/// stored under.
pub const ACCEPTED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// A file received through the product form's `photo` field.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedImage {
    /// Stored file extension, or `None` when the declared content type is
    /// missing or not an accepted image type. The client file name is ignored.
    pub fn extension(&self) -> Option<&'static str> {
        let essence = self
            .content_type
            .as_deref()?
            .split(';')
            .next()?
            .trim()
            .to_ascii_lowercase();
        ACCEPTED_IMAGE_TYPES
            .iter()
            .find(|(content_type, _)| *content_type == essence)
            .map(|(_, ext)| *ext)
    }
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist the image and return the public path it is served from.
    async fn store(&self, image: UploadedImage) -> ApplicationResult<String>;

    /// Remove a file previously returned by `store`.
    async fn discard(&self, public_path: &str) -> ApplicationResult<()>;
}
