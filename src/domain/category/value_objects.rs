use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse the raw value submitted by the product form's category picker.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("Category must be selected.".into()));
        }
        raw.parse::<i64>()
            .ok()
            .and_then(|id| Self::new(id).ok())
            .ok_or_else(|| DomainError::Validation("Selected category does not exist.".into()))
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
