// src/application/validation.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult};

/// Field name to message map collected while validating a submitted form.
///
/// Only the first failure per field is kept, so the message shown next to an
/// input is the most basic rule it broke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, msg: impl Into<String>) {
        self.0.entry(field.to_owned()).or_insert_with(|| msg.into());
    }

    /// Record a rejected value object against `field` and keep going.
    ///
    /// `Validation` and `Conflict` become field messages; anything else is a
    /// real failure and is returned to the caller.
    pub fn capture<T>(
        &mut self,
        field: &str,
        result: DomainResult<T>,
    ) -> ApplicationResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation(msg) | DomainError::Conflict(msg)) => {
                self.add(field, msg);
                Ok(None)
            }
            Err(other) => Err(other.into()),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, msg)| (field.as_str(), msg.as_str()))
    }

    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}
