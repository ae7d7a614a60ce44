use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDetailDto> {
        // A slug that could never have been generated cannot match anything.
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let products = self.product_repo.list_by_category(category.id).await?;

        Ok(CategoryDetailDto {
            category: category.into(),
            products: products.into_iter().map(Into::into).collect(),
        })
    }
}
