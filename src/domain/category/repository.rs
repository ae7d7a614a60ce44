use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Fails with `Conflict` while products still reference the category.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn slug_exists(&self, slug: &Slug, excluding: Option<CategoryId>) -> DomainResult<bool>;
    /// All categories ordered case-insensitively by name.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
