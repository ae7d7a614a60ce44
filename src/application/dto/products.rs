use crate::application::dto::categories::CategoryDto;
use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: u64,
    pub formatted_price: String,
    pub number_in_stock: u64,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub url: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let url = product.url();
        let formatted_price = product.formatted_price();
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description.into_inner(),
            price: product.price.value(),
            formatted_price,
            number_in_stock: product.number_in_stock.value(),
            image_url: product.image_url.map(|u| u.into_inner()),
            category_id: product.category_id.into(),
            url,
        }
    }
}

/// Product with its category populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailDto {
    pub product: ProductDto,
    pub category: CategoryDto,
}

/// What remains after a product delete: the category to return to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedProductDto {
    pub product: ProductDto,
    pub category: Option<CategoryDto>,
}

impl DeletedProductDto {
    /// Where to send the operator after the delete.
    pub fn return_url(&self) -> String {
        self.category
            .as_ref()
            .map_or_else(|| "/".to_owned(), |category| category.url.clone())
    }
}
