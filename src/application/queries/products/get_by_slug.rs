use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetProductBySlugQuery {
    pub slug: String,
}

impl ProductQueryService {
    /// Fetch a product with its category populated.
    pub async fn get_product(
        &self,
        query: GetProductBySlugQuery,
    ) -> ApplicationResult<ProductDetailDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let category = self
            .category_repo
            .find_by_id(product.category_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "product {} references missing category {}",
                    product.id, product.category_id
                ))
            })?;

        Ok(ProductDetailDto {
            product: product.into(),
            category: category.into(),
        })
    }
}
