// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::access::{AccessDecision, AccessGate},
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

pub const INVALID_PASSWORD: &str = "Invalid password";

/// Hash a password into an argon2 PHC string.
pub async fn hash_password(password: &str) -> ApplicationResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    })
    .await
    .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

/// Admin gate backed by an argon2 hash of the configured password.
///
/// Without a configured hash every request is let through.
#[derive(Default, Clone)]
pub struct Argon2AccessGate {
    expected_hash: Option<String>,
}

impl Argon2AccessGate {
    pub const fn open() -> Self {
        Self {
            expected_hash: None,
        }
    }

    pub fn from_hash(hash: impl Into<String>) -> ApplicationResult<Self> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid admin password hash: {err}"))
        })?;
        Ok(Self {
            expected_hash: Some(hash),
        })
    }

    pub async fn from_password(password: &str) -> ApplicationResult<Self> {
        let hash = hash_password(password).await?;
        Ok(Self {
            expected_hash: Some(hash),
        })
    }

    pub const fn is_open(&self) -> bool {
        self.expected_hash.is_none()
    }
}

#[async_trait]
impl AccessGate for Argon2AccessGate {
    async fn check(&self, credential: Option<&str>) -> ApplicationResult<AccessDecision> {
        let Some(expected_hash) = self.expected_hash.clone() else {
            return Ok(AccessDecision::Granted);
        };
        let Some(password) = credential.filter(|value| !value.is_empty()) else {
            return Ok(AccessDecision::Prompt);
        };

        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))??;

        Ok(if matches {
            AccessDecision::Granted
        } else {
            AccessDecision::Rejected(INVALID_PASSWORD.into())
        })
    }
}
