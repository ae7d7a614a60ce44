// src/application/commands/categories/create.rs
use super::{CategoryCommandService, validate::slug_taken_as_field_error};
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::NewCategory,
};

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let valid = self
            .validate(command.name, command.description, command.image_url, None)
            .await?;

        let created = self
            .repo
            .insert(NewCategory {
                name: valid.name,
                slug: valid.slug,
                description: valid.description,
                image_url: valid.image_url,
            })
            .await
            .map_err(slug_taken_as_field_error)?;

        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
