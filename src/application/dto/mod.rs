pub mod categories;
pub mod products;

pub use categories::{
    CategoryDetailDto, CategoryDto, CategoryListItemDto, CategoryOptionDto, DeleteCategoryOutcome,
};
pub use products::{DeletedProductDto, ProductDetailDto, ProductDto};
