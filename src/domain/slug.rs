// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::DisplayName;
use std::fmt;

pub const MIN_SLUG_LEN: usize = 3;
/// Path segments owned by fixed routes such as `/category/create`.
pub const RESERVED_SLUGS: &[&str] = &["create"];

/// Map a display name onto its URL identifier.
///
/// Lowercases the input, drops every `/`, collapses runs of spaces into one
/// and joins the remaining words with `-`. Leading or trailing spaces survive
/// as leading or trailing dashes; callers slugify trimmed names.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut previous_space = false;

    for ch in name.to_lowercase().chars() {
        match ch {
            '/' => {}
            ' ' => {
                if !previous_space {
                    slug.push('-');
                }
                previous_space = true;
            }
            other => {
                slug.push(other);
                previous_space = false;
            }
        }
    }

    slug
}

/// Unique, URL-addressable identifier shared by categories and products.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at least {MIN_SLUG_LEN} characters"
            )));
        }
        if value.contains('/') || value.contains(' ') {
            return Err(DomainError::Validation(
                "slug cannot contain slashes or spaces".into(),
            ));
        }
        if value.to_lowercase() != value {
            return Err(DomainError::Validation("slug must be lowercase".into()));
        }
        Ok(Self(value))
    }

    pub fn from_name(name: &DisplayName) -> DomainResult<Self> {
        let slug = Self::new(slugify(name.as_str())).map_err(|_| {
            DomainError::Validation(format!(
                "Name must contain at least {MIN_SLUG_LEN} URL-safe characters."
            ))
        })?;
        if RESERVED_SLUGS.contains(&slug.as_str()) {
            return Err(DomainError::Validation(format!(
                "Name \"{name}\" is reserved."
            )));
        }
        Ok(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The slug as a single percent-encoded path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
