// src/presentation/http/forms.rs
use axum::extract::Multipart;
use serde::{Deserialize, Serialize};

use crate::application::{
    commands::{
        categories::{CreateCategoryCommand, UpdateCategoryCommand},
        products::ProductInput,
    },
    dto::{CategoryDto, ProductDto},
    ports::storage::UploadedImage,
};
use crate::presentation::http::error::HttpResult;

/// Query string carried by every gated category page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateParams {
    pub password: Option<String>,
}

/// `?category=<id>` preselects the category on the new-product form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProductParams {
    pub category: Option<String>,
}

/// Category form fields as typed, echoed back when validation fails.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl CategoryForm {
    pub fn from_category(category: &CategoryDto) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            image_url: category.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_create_command(&self) -> CreateCategoryCommand {
        CreateCategoryCommand {
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn to_update_command(&self, id: i64) -> UpdateCategoryCommand {
        UpdateCategoryCommand {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Product form fields. Numbers stay text so rejected input is shown as typed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub number_in_stock: String,
    pub image_url: String,
    pub category: String,
    #[serde(skip)]
    pub photo: Option<UploadedImage>,
}

impl ProductForm {
    pub fn from_product(product: &ProductDto) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            number_in_stock: product.number_in_stock.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
            category: product.category_id.to_string(),
            photo: None,
        }
    }

    /// Read the `multipart/form-data` body of the product form.
    ///
    /// Unknown fields are skipped. The `photo` part is kept as raw bytes;
    /// an empty file input arrives as a zero-length part.
    pub async fn from_multipart(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "photo" => {
                    let file_name = field.file_name().map(str::to_owned);
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    form.photo = Some(UploadedImage {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                "name" => form.name = field.text().await?,
                "description" => form.description = field.text().await?,
                "price" => form.price = field.text().await?,
                "number_in_stock" => form.number_in_stock = field.text().await?,
                "image_url" => form.image_url = field.text().await?,
                "category" => form.category = field.text().await?,
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }
        Ok(form)
    }

    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            number_in_stock: self.number_in_stock.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            photo: self.photo.clone(),
        }
    }
}
