// src/domain/product/services.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use crate::domain::value_objects::DisplayName;

pub const DUPLICATE_PRODUCT_NAME: &str = "A product with this name already exists.";

/// Derives product slugs and guards their uniqueness.
pub struct ProductSlugService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductSlugService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn claim_slug(
        &self,
        name: &DisplayName,
        ignore_id: Option<ProductId>,
    ) -> DomainResult<Slug> {
        let slug = Slug::from_name(name)?;
        if self.repo.slug_exists(&slug, ignore_id).await? {
            return Err(DomainError::Conflict(DUPLICATE_PRODUCT_NAME.into()));
        }
        Ok(slug)
    }
}
