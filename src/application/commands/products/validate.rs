// src/application/commands/products/validate.rs
use super::ProductCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::storage::UploadedImage,
        validation::FieldErrors,
    },
    domain::{
        category::CategoryId,
        errors::{DomainError, DomainResult},
        product::{Price, ProductId, StockCount, services::DUPLICATE_PRODUCT_NAME},
        slug::Slug,
        value_objects::{Description, DisplayName, ImageUrl},
    },
};

/// Raw product form fields, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub number_in_stock: String,
    pub image_url: String,
    pub category: String,
    pub photo: Option<UploadedImage>,
}

pub(super) struct ValidProduct {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Description,
    pub price: Price,
    pub number_in_stock: StockCount,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
    pub photo: Option<UploadedImage>,
}

impl ProductCommandService {
    pub(super) async fn validate(
        &self,
        input: ProductInput,
        ignore_id: Option<ProductId>,
    ) -> ApplicationResult<ValidProduct> {
        let mut errors = FieldErrors::default();

        let name = errors.capture("name", DisplayName::new(input.name))?;
        let description = errors.capture("description", Description::new(input.description))?;
        let price = errors.capture("price", Price::parse(&input.price))?;
        let number_in_stock =
            errors.capture("number_in_stock", StockCount::parse(&input.number_in_stock))?;
        let image_url = errors
            .capture("image_url", ImageUrl::optional(input.image_url))?
            .flatten();
        let photo = errors
            .capture("photo", check_photo(input.photo))?
            .flatten();

        let slug = match &name {
            Some(name) => {
                errors.capture("name", self.slug_service.claim_slug(name, ignore_id).await)?
            }
            None => None,
        };

        let category_id = match errors.capture("category", CategoryId::parse(&input.category))? {
            Some(id) => errors.capture("category", self.ensure_category_exists(id).await)?,
            None => None,
        };

        match (name, slug, description, price, number_in_stock, category_id) {
            (
                Some(name),
                Some(slug),
                Some(description),
                Some(price),
                Some(number_in_stock),
                Some(category_id),
            ) if errors.is_empty() => Ok(ValidProduct {
                name,
                slug,
                description,
                price,
                number_in_stock,
                image_url,
                category_id,
                photo,
            }),
            _ => Err(ApplicationError::Validation(errors)),
        }
    }

    async fn ensure_category_exists(&self, id: CategoryId) -> DomainResult<CategoryId> {
        match self.category_repo.find_by_id(id).await? {
            Some(category) => Ok(category.id),
            None => Err(DomainError::Validation(
                "Selected category does not exist.".into(),
            )),
        }
    }

    /// Store the photo if one came with the form; its path replaces any
    /// manually entered image URL.
    pub(super) async fn resolve_image(
        &self,
        image_url: Option<ImageUrl>,
        photo: Option<UploadedImage>,
    ) -> ApplicationResult<ResolvedImage> {
        let Some(photo) = photo else {
            return Ok(ResolvedImage {
                url: image_url,
                uploaded: None,
            });
        };
        let path = self.image_storage.store(photo).await?;
        match ImageUrl::new(path.clone()) {
            Ok(url) => Ok(ResolvedImage {
                url: Some(url),
                uploaded: Some(path),
            }),
            Err(err) => {
                self.discard_upload(Some(&path)).await;
                Err(ApplicationError::infrastructure(format!("image storage returned {err}")))
            }
        }
    }

    /// Remove a photo stored for a write that did not go through.
    pub(super) async fn discard_upload(&self, uploaded: Option<&str>) {
        let Some(path) = uploaded else {
            return;
        };
        if let Err(err) = self.image_storage.discard(path).await {
            tracing::warn!(path, error = %err, "failed to discard orphaned upload");
        }
    }
}

/// Image URL to persist, plus the stored photo path when one was uploaded.
pub(super) struct ResolvedImage {
    pub url: Option<ImageUrl>,
    pub uploaded: Option<String>,
}

fn check_photo(photo: Option<UploadedImage>) -> DomainResult<Option<UploadedImage>> {
    match photo {
        Some(photo) if photo.bytes.is_empty() => Ok(None),
        Some(photo) if photo.extension().is_none() => {
            Err(DomainError::Validation("Photo must be an image file.".into()))
        }
        other => Ok(other),
    }
}

pub(super) fn slug_taken_as_field_error(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => ApplicationError::validation("name", DUPLICATE_PRODUCT_NAME),
        // The referenced category vanished between validation and the write.
        DomainError::NotFound(_) => {
            ApplicationError::validation("category", "Selected category does not exist.")
        }
        other => other.into(),
    }
}
