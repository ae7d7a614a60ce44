// src/infrastructure/repositories/postgres_category.rs
use super::{map_sqlx, map_sqlx_on_delete};
use crate::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{Description, DisplayName, ImageUrl};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const CATEGORY_COLUMNS: &str = "id, name, slug, description, image_url";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    image_url: Option<String>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description.map(Description::optional).transpose()?.flatten(),
            image_url: row.image_url.map(ImageUrl::optional).transpose()?.flatten(),
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            description,
            image_url,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, slug, description, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(Description::as_str))
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            description,
            image_url,
        } = update;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories
             SET name = $2, slug = $3, description = $4, image_url = $5
             WHERE id = $1
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_ref().map(Description::as_str))
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_on_delete)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<CategoryId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM categories
                 WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY lower(name), id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
