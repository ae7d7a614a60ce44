use super::CategoryQueryService;
use crate::application::{
    dto::{CategoryListItemDto, CategoryOptionDto},
    error::ApplicationResult,
};

impl CategoryQueryService {
    /// Every category with the number of products referencing it. The count
    /// is computed per call and never stored.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryListItemDto>> {
        let categories = self.repo.list().await?;
        let counts = self.product_repo.count_all_by_category().await?;

        Ok(categories
            .into_iter()
            .map(|category| {
                let product_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryListItemDto {
                    category: category.into(),
                    product_count,
                }
            })
            .collect())
    }

    /// Categories for the product form's picker, ordered by name.
    pub async fn list_category_options(&self) -> ApplicationResult<Vec<CategoryOptionDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
