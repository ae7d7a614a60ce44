// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::DeletedProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    /// Nothing references a product, so deletion is unconditional. The
    /// product's category is resolved first so the caller knows where to go.
    pub async fn delete_product(
        &self,
        command: DeleteProductCommand,
    ) -> ApplicationResult<DeletedProductDto> {
        let id = ProductId::new(command.id)
            .map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        let category = self.category_repo.find_by_id(product.category_id).await?;

        self.repo.delete(id).await?;
        tracing::info!(product_id = %id, "product deleted");

        Ok(DeletedProductDto {
            product: product.into(),
            category: category.map(Into::into),
        })
    }
}
