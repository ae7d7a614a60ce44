// src/application/ports/access.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Outcome of presenting a credential to the admin gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// No credential was supplied; ask for one.
    Prompt,
    /// A credential was supplied and did not match.
    Rejected(String),
}

#[async_trait]
pub trait AccessGate: Send + Sync {
    /// Check the credential guarding mutating category operations.
    async fn check(&self, credential: Option<&str>) -> ApplicationResult<AccessDecision>;
}
