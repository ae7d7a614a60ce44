pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewProduct, Product, ProductUpdate};
pub use repository::ProductRepository;
pub use services::ProductSlugService;
pub use value_objects::{Price, ProductId, StockCount};
