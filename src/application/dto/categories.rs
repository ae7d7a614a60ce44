use crate::application::dto::products::ProductDto;
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub url: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        let url = category.url();
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description.map(|d| d.into_inner()),
            image_url: category.image_url.map(|u| u.into_inner()),
            url,
        }
    }
}

/// Category row on the listing page, annotated with how many products use it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListItemDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub product_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetailDto {
    pub category: CategoryDto,
    pub products: Vec<ProductDto>,
}

/// Entry in the product form's category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOptionDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryOptionDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
        }
    }
}

/// Result of a category delete request. `Blocked` is a normal outcome, not
/// a failure: the category stays and the caller is shown what still uses it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeleteCategoryOutcome {
    Deleted {
        category: CategoryDto,
    },
    Blocked {
        category: CategoryDto,
        products: Vec<ProductDto>,
    },
}

impl DeleteCategoryOutcome {
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}
