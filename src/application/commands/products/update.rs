// src/application/commands/products/update.rs
use super::{ProductCommandService, validate::{ProductInput, slug_taken_as_field_error}};
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::{ProductId, ProductUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub id: i64,
    pub input: ProductInput,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = ProductId::new(command.id)
            .map_err(|_| ApplicationError::not_found("product not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let valid = self.validate(command.input, Some(id)).await?;
        let image = self.resolve_image(valid.image_url, valid.photo).await?;

        let result = self
            .repo
            .update(ProductUpdate {
                id,
                name: valid.name,
                slug: valid.slug,
                description: valid.description,
                price: valid.price,
                number_in_stock: valid.number_in_stock,
                image_url: image.url,
                category_id: valid.category_id,
            })
            .await;
        let updated = match result {
            Ok(updated) => updated,
            Err(err) => {
                self.discard_upload(image.uploaded.as_deref()).await;
                return Err(slug_taken_as_field_error(err));
            }
        };

        tracing::info!(product_id = %updated.id, slug = %updated.slug, "product updated");
        Ok(updated.into())
    }
}
