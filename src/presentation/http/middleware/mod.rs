pub mod admin_gate;

pub use admin_gate::require_admin;
