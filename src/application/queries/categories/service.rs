use std::sync::Arc;

use crate::domain::{category::CategoryRepository, product::ProductRepository};

pub struct CategoryQueryService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) product_repo: Arc<dyn ProductRepository>,
}

impl CategoryQueryService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self { repo, product_repo }
    }
}
