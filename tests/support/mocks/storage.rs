// tests/support/mocks/storage.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use catalog_core::application::ApplicationResult;
use catalog_core::application::ports::storage::{ImageStorage, UploadedImage};

/// Keeps uploads in memory and hands out sequential `/uploads/` paths.
#[derive(Clone, Default)]
pub struct RecordingImageStorage {
    stored: Arc<Mutex<Vec<UploadedImage>>>,
    discarded: Arc<Mutex<Vec<String>>>,
}

impl RecordingImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<UploadedImage> {
        self.stored.lock().expect("storage poisoned").clone()
    }

    pub fn discarded(&self) -> Vec<String> {
        self.discarded.lock().expect("storage poisoned").clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn store(&self, image: UploadedImage) -> ApplicationResult<String> {
        let mut stored = self.stored.lock().expect("storage poisoned");
        stored.push(image);
        Ok(format!("/uploads/test-{}.png", stored.len()))
    }

    async fn discard(&self, public_path: &str) -> ApplicationResult<()> {
        self.discarded
            .lock()
            .expect("storage poisoned")
            .push(public_path.to_owned());
        Ok(())
    }
}
