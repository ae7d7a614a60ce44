// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::price::format_price;
use crate::domain::product::value_objects::{Price, ProductId, StockCount};
use crate::domain::slug::Slug;
use crate::domain::value_objects::{Description, DisplayName, ImageUrl};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Description,
    pub price: Price,
    pub number_in_stock: StockCount,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
}

impl Product {
    pub fn url(&self) -> String {
        format!("/product/{}", self.slug.path_segment())
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price.value())
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Description,
    pub price: Price,
    pub number_in_stock: StockCount,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
}

/// Full replacement of a product's editable fields.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: DisplayName,
    pub slug: Slug,
    pub description: Description,
    pub price: Price,
    pub number_in_stock: StockCount,
    pub image_url: Option<ImageUrl>,
    pub category_id: CategoryId,
}
