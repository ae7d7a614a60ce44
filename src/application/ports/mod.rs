// src/application/ports/mod.rs
pub mod access;
pub mod storage;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AccessGatePort = dyn access::AccessGate;
pub type ImageStoragePort = dyn storage::ImageStorage;
