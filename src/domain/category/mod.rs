pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, CategoryUpdate, NewCategory};
pub use repository::CategoryRepository;
pub use services::CategorySlugService;
pub use value_objects::CategoryId;
