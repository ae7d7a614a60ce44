use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in whole currency units, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const MIN: u64 = 1;

    pub fn new(value: i64) -> DomainResult<Self> {
        u64::try_from(value)
            .ok()
            .filter(|value| *value >= Self::MIN)
            .map(Self)
            .ok_or_else(|| {
                DomainError::Validation(format!("Price must be at least {}.", Self::MIN))
            })
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("Price must be specified.".into()));
        }
        let value = raw
            .parse::<i64>()
            .map_err(|_| DomainError::Validation("Price must be a whole number.".into()))?;
        Self::new(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        i64::try_from(value.0).unwrap_or(i64::MAX)
    }
}

/// Units on hand; never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StockCount(u64);

impl StockCount {
    pub fn new(value: i64) -> DomainResult<Self> {
        u64::try_from(value).map(Self).map_err(|_| {
            DomainError::Validation("Number in stock cannot be negative.".into())
        })
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation(
                "Number in stock must be specified.".into(),
            ));
        }
        let value = raw.parse::<i64>().map_err(|_| {
            DomainError::Validation("Number in stock must be a whole number.".into())
        })?;
        Self::new(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<StockCount> for i64 {
    fn from(value: StockCount) -> Self {
        i64::try_from(value.0).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn price_must_be_at_least_one() {
        assert_eq!(message(Price::parse("0").unwrap_err()), "Price must be at least 1.");
        assert_eq!(message(Price::parse("-5").unwrap_err()), "Price must be at least 1.");
        assert_eq!(Price::parse(" 1 ").unwrap().value(), 1);
    }

    #[test]
    fn price_rejects_fractions_and_text() {
        assert_eq!(message(Price::parse("9.99").unwrap_err()), "Price must be a whole number.");
        assert_eq!(message(Price::parse("cheap").unwrap_err()), "Price must be a whole number.");
        assert_eq!(message(Price::parse("").unwrap_err()), "Price must be specified.");
    }

    #[test]
    fn stock_accepts_zero_and_rejects_negative() {
        assert_eq!(StockCount::parse("0").unwrap().value(), 0);
        assert_eq!(
            message(StockCount::parse("-1").unwrap_err()),
            "Number in stock cannot be negative."
        );
    }
}
