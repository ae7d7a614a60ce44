// src/domain/category/services.rs
use std::sync::Arc;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::value_objects::DisplayName;

pub const DUPLICATE_CATEGORY_NAME: &str = "A category with this name already exists.";

/// Derives category slugs and guards their uniqueness.
pub struct CategorySlugService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategorySlugService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Slug for `name`, or `Conflict` when another category already owns it.
    /// `ignore_id` lets a category keep its own slug on update.
    pub async fn claim_slug(
        &self,
        name: &DisplayName,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<Slug> {
        let slug = Slug::from_name(name)?;
        if self.repo.slug_exists(&slug, ignore_id).await? {
            return Err(DomainError::Conflict(DUPLICATE_CATEGORY_NAME.into()));
        }
        Ok(slug)
    }
}
