// src/application/commands/categories/update.rs
use super::{CategoryCommandService, validate::slug_taken_as_field_error};
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let valid = self
            .validate(command.name, command.description, command.image_url, Some(id))
            .await?;

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                name: valid.name,
                slug: valid.slug,
                description: valid.description,
                image_url: valid.image_url,
            })
            .await
            .map_err(slug_taken_as_field_error)?;

        tracing::info!(category_id = %updated.id, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
