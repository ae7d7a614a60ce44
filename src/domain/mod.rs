pub mod category;
pub mod errors;
pub mod price;
pub mod product;
pub mod slug;
pub mod value_objects;
