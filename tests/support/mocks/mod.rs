// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod access;
pub mod catalog;
pub mod storage;

pub use access::{StaticAccessGate, TEST_PASSWORD};
pub use catalog::InMemoryCatalog;
pub use storage::RecordingImageStorage;
