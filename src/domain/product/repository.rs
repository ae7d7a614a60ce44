use std::collections::HashMap;

use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    async fn slug_exists(&self, slug: &Slug, excluding: Option<ProductId>) -> DomainResult<bool>;
    /// Products referencing `category_id`, ordered by name.
    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Product>>;
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
    /// Product counts keyed by category; categories without products are absent.
    async fn count_all_by_category(&self) -> DomainResult<HashMap<CategoryId, u64>>;
}
