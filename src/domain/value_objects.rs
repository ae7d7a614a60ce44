// src/domain/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use validator::ValidateUrl;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 10;
/// Public path prefix under which uploaded images are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Trimmed display name of a category or product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("Name must be specified.".into()));
        }
        if trimmed.chars().count() < MIN_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "Name must be at least {MIN_NAME_LEN} characters."
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Description must be specified.".into(),
            ));
        }
        if trimmed.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(DomainError::Validation(format!(
                "Description must be at least {MIN_DESCRIPTION_LEN} characters."
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Blank input means "no description".
    pub fn optional(value: impl Into<String>) -> DomainResult<Option<Self>> {
        let value = value.into();
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Either an absolute http(s) URL or the public path of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if is_upload_path(trimmed) || is_web_url(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(DomainError::Validation("Image URL must be a valid URL.".into()))
        }
    }

    pub fn optional(value: impl Into<String>) -> DomainResult<Option<Self>> {
        let value = value.into();
        if value.trim().is_empty() {
            Ok(None)
        } else {
            Self::new(value).map(Some)
        }
    }

    pub fn is_upload(&self) -> bool {
        self.0.starts_with(UPLOADS_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_upload_path(value: &str) -> bool {
    value
        .strip_prefix(UPLOADS_PREFIX)
        .is_some_and(|rest| {
            !rest.is_empty()
                && !rest.contains("..")
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
        })
}

fn is_web_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")) && value.validate_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = DisplayName::new("  Garden  ").unwrap();
        assert_eq!(name.as_str(), "Garden");
    }

    #[test]
    fn blank_name_is_reported_as_missing() {
        let err = DisplayName::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Name must be specified."));
    }

    #[test]
    fn short_name_is_rejected() {
        assert!(DisplayName::new("ab").is_err());
        assert!(DisplayName::new(" ab ").is_err());
        assert!(DisplayName::new("abc").is_ok());
    }

    #[test]
    fn description_needs_ten_characters() {
        assert!(Description::new("123456789").is_err());
        assert!(Description::new("1234567890").is_ok());
    }

    #[test]
    fn optional_description_accepts_blank() {
        assert_eq!(Description::optional("  ").unwrap(), None);
        assert!(Description::optional("too short").is_err());
    }

    #[test]
    fn image_url_accepts_web_urls_and_upload_paths() {
        assert!(ImageUrl::new("https://cdn.example.com/a.png").is_ok());
        assert!(ImageUrl::new("/uploads/1f2e.png").unwrap().is_upload());
    }

    #[test]
    fn image_url_rejects_garbage() {
        assert!(ImageUrl::new("not a url").is_err());
        assert!(ImageUrl::new("javascript:alert(1)").is_err());
        assert!(ImageUrl::new("/uploads/../secret").is_err());
        assert!(ImageUrl::new("/etc/passwd").is_err());
    }
}
