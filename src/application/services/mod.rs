// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{categories::CategoryCommandService, products::ProductCommandService},
        ports::{AccessGatePort, ImageStoragePort, access::AccessDecision},
        queries::{categories::CategoryQueryService, products::ProductQueryService},
    },
    domain::{
        category::{CategoryRepository, CategorySlugService},
        product::{ProductRepository, ProductSlugService},
    },
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    access_gate: Arc<AccessGatePort>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        access_gate: Arc<AccessGatePort>,
        image_storage: Arc<ImageStoragePort>,
    ) -> Self {
        let category_slugs = Arc::new(CategorySlugService::new(Arc::clone(&category_repo)));
        let product_slugs = Arc::new(ProductSlugService::new(Arc::clone(&product_repo)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&product_repo),
            category_slugs,
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&product_repo),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_repo),
            product_slugs,
            image_storage,
        ));
        let product_queries = Arc::new(ProductQueryService::new(product_repo, category_repo));

        Self {
            category_commands,
            category_queries,
            product_commands,
            product_queries,
            access_gate,
        }
    }

    /// Check the admin credential presented with a mutating category request.
    pub async fn authorize_mutation(
        &self,
        credential: Option<&str>,
    ) -> ApplicationResult<AccessDecision> {
        let decision = self.access_gate.check(credential).await?;
        if let AccessDecision::Rejected(reason) = &decision {
            tracing::warn!(%reason, "admin credential rejected");
        }
        Ok(decision)
    }
}
