use std::sync::Arc;

use crate::domain::{category::CategoryRepository, product::ProductRepository};

pub struct ProductQueryService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ProductQueryService {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            repo,
            category_repo,
        }
    }
}
