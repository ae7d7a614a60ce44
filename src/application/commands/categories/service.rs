// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::domain::{
    category::{CategoryRepository, CategorySlugService},
    product::ProductRepository,
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) slug_service: Arc<CategorySlugService>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        slug_service: Arc<CategorySlugService>,
    ) -> Self {
        Self {
            repo,
            product_repo,
            slug_service,
        }
    }
}
