// src/infrastructure/repositories/postgres_product.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    NewProduct, Price, Product, ProductId, ProductRepository, ProductUpdate, StockCount,
};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{Description, DisplayName, ImageUrl};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const PRODUCT_COLUMNS: &str =
    "id, name, slug, description, price, number_in_stock, image_url, category_id";

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
    price: i64,
    number_in_stock: i64,
    image_url: Option<String>,
    category_id: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: Description::new(row.description)?,
            price: Price::new(row.price)?,
            number_in_stock: StockCount::new(row.number_in_stock)?,
            image_url: row.image_url.map(ImageUrl::optional).transpose()?.flatten(),
            category_id: CategoryId::new(row.category_id)?,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            slug,
            description,
            price,
            number_in_stock,
            image_url,
            category_id,
        } = product;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products
                 (name, slug, description, price, number_in_stock, image_url, category_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(i64::from(price))
        .bind(i64::from(number_in_stock))
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .bind(i64::from(category_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            name,
            slug,
            description,
            price,
            number_in_stock,
            image_url,
            category_id,
        } = update;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products
             SET name = $2, slug = $3, description = $4, price = $5,
                 number_in_stock = $6, image_url = $7, category_id = $8
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(i64::from(price))
        .bind(i64::from(number_in_stock))
        .bind(image_url.as_ref().map(ImageUrl::as_str))
        .bind(i64::from(category_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("product not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &Slug, excluding: Option<ProductId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM products
                 WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY lower(name), id"
        ))
        .bind(i64::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE category_id = $1",
        )
        .bind(i64::from(category_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn count_all_by_category(&self) -> DomainResult<HashMap<CategoryId, u64>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT category_id, COUNT(*) FROM products GROUP BY category_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(category_id, count)| {
                Ok((CategoryId::new(category_id)?, u64::try_from(count).unwrap_or(0)))
            })
            .collect()
    }
}
