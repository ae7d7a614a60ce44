// tests/support/mocks/access.rs
use async_trait::async_trait;

use catalog_core::application::ApplicationResult;
use catalog_core::application::ports::access::{AccessDecision, AccessGate};

pub const TEST_PASSWORD: &str = "open-sesame";

/// Plain string comparison; avoids hashing cost in HTTP tests.
#[derive(Clone, Debug, Default)]
pub struct StaticAccessGate {
    password: Option<String>,
}

impl StaticAccessGate {
    pub fn open() -> Self {
        Self { password: None }
    }

    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
        }
    }
}

#[async_trait]
impl AccessGate for StaticAccessGate {
    async fn check(&self, credential: Option<&str>) -> ApplicationResult<AccessDecision> {
        let Some(expected) = &self.password else {
            return Ok(AccessDecision::Granted);
        };
        Ok(match credential.filter(|c| !c.is_empty()) {
            None => AccessDecision::Prompt,
            Some(given) if given == expected => AccessDecision::Granted,
            Some(_) => AccessDecision::Rejected("Invalid password".into()),
        })
    }
}
