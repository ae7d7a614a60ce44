// src/application/commands/products/create.rs
use super::{ProductCommandService, validate::{ProductInput, slug_taken_as_field_error}};
use crate::{
    application::{dto::ProductDto, error::ApplicationResult},
    domain::product::NewProduct,
};

#[derive(Debug, Clone, Default)]
pub struct CreateProductCommand {
    pub input: ProductInput,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let valid = self.validate(command.input, None).await?;
        let image = self.resolve_image(valid.image_url, valid.photo).await?;

        let result = self
            .repo
            .insert(NewProduct {
                name: valid.name,
                slug: valid.slug,
                description: valid.description,
                price: valid.price,
                number_in_stock: valid.number_in_stock,
                image_url: image.url,
                category_id: valid.category_id,
            })
            .await;
        let created = match result {
            Ok(created) => created,
            Err(err) => {
                self.discard_upload(image.uploaded.as_deref()).await;
                return Err(slug_taken_as_field_error(err));
            }
        };

        tracing::info!(product_id = %created.id, slug = %created.slug, "product created");
        Ok(created.into())
    }
}
