// src/application/commands/products/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod validate;

pub use create::CreateProductCommand;
pub use delete::DeleteProductCommand;
pub use service::ProductCommandService;
pub use update::UpdateProductCommand;
pub use validate::ProductInput;
