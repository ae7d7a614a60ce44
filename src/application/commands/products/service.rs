// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::ports::storage::ImageStorage,
    domain::{
        category::CategoryRepository,
        product::{ProductRepository, ProductSlugService},
    },
};

pub struct ProductCommandService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<ProductSlugService>,
    pub(super) image_storage: Arc<dyn ImageStorage>,
}

impl ProductCommandService {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<ProductSlugService>,
        image_storage: Arc<dyn ImageStorage>,
    ) -> Self {
        Self {
            repo,
            category_repo,
            slug_service,
            image_storage,
        }
    }
}
