//! # Range Entity
//!
//! A CEP interval with a flat delivery time and cost.

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::postal_code::PostalPrefix;
use rust_decimal::Decimal;
use serde::Serialize;

/// A postal-code interval priced at a flat rate.
///
/// Bounds are CEP prefixes and both are inclusive. `start <= end` is not
/// enforced; a reversed range simply matches nothing.
///
/// # Examples
///
/// ```
/// use frete::domain::entities::range::Range;
/// use rust_decimal::Decimal;
///
/// let range = Range::new("01000-000", "02000", 5, Decimal::new(1000, 2)).unwrap();
/// assert_eq!(range.start().as_str(), "01000");
/// assert_eq!(range.end().as_str(), "02000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    start: PostalPrefix,
    end: PostalPrefix,
    /// Delivery time in days.
    time: u32,
    cost: Decimal,
}

impl Range {
    /// Creates a range, validating both bounds with the prefix-tolerant rule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` naming `start` or `end`.
    pub fn new(start: &str, end: &str, time: u32, cost: Decimal) -> DomainResult<Self> {
        Ok(Self {
            start: PostalPrefix::parse("start", start)?,
            end: PostalPrefix::parse("end", end)?,
            time,
            cost,
        })
    }

    /// Returns the lower bound.
    #[inline]
    #[must_use]
    pub fn start(&self) -> &PostalPrefix {
        &self.start
    }

    /// Returns the upper bound.
    #[inline]
    #[must_use]
    pub fn end(&self) -> &PostalPrefix {
        &self.end
    }

    /// Returns the delivery time in days.
    #[inline]
    #[must_use]
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Returns the flat cost.
    #[inline]
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Returns true if `prefix` lies within the bounds, inclusive.
    #[must_use]
    pub fn contains(&self, prefix: &PostalPrefix) -> bool {
        &self.start <= prefix && prefix <= &self.end
    }
}
