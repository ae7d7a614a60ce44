// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::{CategoryDto, DeleteCategoryOutcome},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{Category, CategoryId},
        errors::DomainError,
    },
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<DeleteCategoryOutcome> {
        let id = CategoryId::new(command.id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        if self.product_repo.count_by_category(id).await? > 0 {
            return self.blocked(category).await;
        }

        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(category_id = %id, "category deleted");
                Ok(DeleteCategoryOutcome::Deleted {
                    category: category.into(),
                })
            }
            // A product was attached after the count above.
            Err(DomainError::Conflict(_)) => self.blocked(category).await,
            Err(DomainError::NotFound(_)) => Err(ApplicationError::not_found("category not found")),
            Err(other) => Err(other.into()),
        }
    }

    async fn blocked(&self, category: Category) -> ApplicationResult<DeleteCategoryOutcome> {
        let products = self.product_repo.list_by_category(category.id).await?;
        tracing::debug!(
            category_id = %category.id,
            blocking = products.len(),
            "category delete blocked by products"
        );
        Ok(DeleteCategoryOutcome::Blocked {
            category: CategoryDto::from(category),
            products: products.into_iter().map(Into::into).collect(),
        })
    }
}
