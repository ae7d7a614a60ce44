// src/infrastructure/security/mod.rs
pub mod password;

pub use password::{Argon2AccessGate, hash_password};
