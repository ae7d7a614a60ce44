mod get_by_slug;
mod service;

pub use get_by_slug::GetProductBySlugQuery;
pub use service::ProductQueryService;
