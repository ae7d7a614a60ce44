// src/domain/category/entity.rs
use crate::domain::category::value_objects::CategoryId;
use crate::domain::slug::Slug;
use crate::domain::value_objects::{Description, DisplayName, ImageUrl};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub image_url: Option<ImageUrl>,
}

impl Category {
    pub fn url(&self) -> String {
        format!("/category/{}", self.slug.path_segment())
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub image_url: Option<ImageUrl>,
}

/// Full replacement of a category's editable fields.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Option<Description>,
    pub image_url: Option<ImageUrl>,
}
