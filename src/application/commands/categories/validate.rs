// src/application/commands/categories/validate.rs
use super::CategoryCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::{
        category::{CategoryId, services::DUPLICATE_CATEGORY_NAME},
        errors::DomainError,
        slug::Slug,
        value_objects::{Description, DisplayName, ImageUrl},
    },
};

pub(super) struct ValidCategory {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub image_url: Option<ImageUrl>,
}

impl CategoryCommandService {
    /// Run every category rule, collecting all failures before returning.
    pub(super) async fn validate(
        &self,
        name: String,
        description: String,
        image_url: String,
        ignore_id: Option<CategoryId>,
    ) -> ApplicationResult<ValidCategory> {
        let mut errors = FieldErrors::default();

        let name = errors.capture("name", DisplayName::new(name))?;
        let description = errors
            .capture("description", Description::optional(description))?
            .flatten();
        let image_url = errors
            .capture("image_url", ImageUrl::optional(image_url))?
            .flatten();

        let slug = match &name {
            Some(name) => {
                errors.capture("name", self.slug_service.claim_slug(name, ignore_id).await)?
            }
            None => None,
        };

        match (name, slug) {
            (Some(name), Some(slug)) if errors.is_empty() => Ok(ValidCategory {
                name,
                slug,
                description,
                image_url,
            }),
            _ => Err(ApplicationError::Validation(errors)),
        }
    }
}

/// A unique-constraint hit from the store means another writer claimed the
/// slug between our check and the write.
pub(super) fn slug_taken_as_field_error(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => ApplicationError::validation("name", DUPLICATE_CATEGORY_NAME),
        other => other.into(),
    }
}
