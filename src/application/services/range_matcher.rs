//! # Range Matcher
//!
//! Local, table-driven shipping estimates.
//!
//! A [`RangeMatcher`] is created for one destination and holds an ordered
//! list of [`Range`]s. [`RangeMatcher::result`] scans every range in insertion
//! order and returns one [`ShippingQuote`] per range containing the
//! destination. Overlaps are allowed and each overlapping range contributes
//! its own quote.
//!
//! Comparison happens at prefix resolution: range bounds keep only their
//! 5-digit prefix, and so does the destination.
//!
//! # Examples
//!
//! ```
//! use frete::application::services::range_matcher::RangeMatcher;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), frete::domain::errors::DomainError> {
//! let matcher = RangeMatcher::new("01500-000")?
//!     .add_range("01000-000", "02000-000", 5, Decimal::new(1000, 2))?
//!     .add_range("30000", "39999", 8, Decimal::new(2250, 2))?;
//!
//! let quotes = matcher.result();
//! assert_eq!(quotes.len(), 1);
//! assert_eq!(quotes[0].time(), Some(5));
//! # Ok(())
//! # }
//! ```

use crate::domain::entities::range::Range;
use crate::domain::entities::shipping_quote::ShippingQuote;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::postal_code::{PostalCode, PostalPrefix};
use rust_decimal::Decimal;

/// Static lookup table of CEP ranges for a fixed destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatcher {
    destination: PostalCode,
    /// Cached prefix of `destination`, the resolution ranges compare at.
    destination_prefix: PostalPrefix,
    ranges: Vec<Range>,
}

impl RangeMatcher {
    /// Creates an empty matcher for `destination`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if `destination` is not a
    /// full 8-digit CEP.
    pub fn new(destination: &str) -> DomainResult<Self> {
        let destination = PostalCode::parse("destination", destination)?;
        Ok(Self {
            destination_prefix: destination.prefix(),
            destination,
            ranges: Vec::new(),
        })
    }

    /// Appends a range.
    ///
    /// No sorting, merging or overlap detection takes place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` naming `start` or `end` when
    /// a bound fails the prefix-tolerant rule. The matcher is consumed.
    pub fn add_range(mut self, start: &str, end: &str, time: u32, cost: Decimal) -> DomainResult<Self> {
        self.ranges.push(Range::new(start, end, time, cost)?);
        Ok(self)
    }

    /// Returns a quote for every range containing the destination, in
    /// insertion order. No match yields an empty vector.
    #[must_use]
    pub fn result(&self) -> Vec<ShippingQuote<Range>> {
        let quotes: Vec<_> = self
            .ranges
            .iter()
            .filter(|range| range.contains(&self.destination_prefix))
            .map(|range| ShippingQuote::new(Some(range.time()), Some(range.cost()), range.clone()))
            .collect();

        tracing::debug!(
            destination = %self.destination,
            ranges = self.ranges.len(),
            matched = quotes.len(),
            "matched shipping ranges"
        );

        quotes
    }

    /// Returns the destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &PostalCode {
        &self.destination
    }

    /// Returns the ranges in insertion order.
    #[inline]
    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }
}
