// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_product;

pub use error::{map_sqlx, map_sqlx_on_delete};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_product::PostgresProductRepository;
