//! # Shipping Quote
//!
//! A single time/cost estimate, produced either by a matching range or by a
//! carrier service entry.

use rust_decimal::Decimal;
use serde::Serialize;

/// A delivery estimate together with the payload it was derived from.
///
/// `R` is the source: a [`Range`](crate::domain::entities::range::Range) for
/// local tables, or the carrier's per-service entry for remote quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingQuote<R> {
    time: Option<u32>,
    cost: Option<Decimal>,
    raw: R,
}

impl<R> ShippingQuote<R> {
    /// Creates a quote.
    #[must_use]
    pub fn new(time: Option<u32>, cost: Option<Decimal>, raw: R) -> Self {
        Self { time, cost, raw }
    }

    /// Returns the delivery time in days, if the source provided one.
    #[inline]
    #[must_use]
    pub fn time(&self) -> Option<u32> {
        self.time
    }

    /// Returns the cost, if the source provided one.
    #[inline]
    #[must_use]
    pub fn cost(&self) -> Option<Decimal> {
        self.cost
    }

    /// Returns the source payload.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &R {
        &self.raw
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::entities::range::Range;

    #[test]
    fn accessors() {
        let quote = ShippingQuote::new(Some(3), None, "raw");
        assert_eq!(quote.time(), Some(3));
        assert_eq!(quote.cost(), None);
        assert_eq!(*quote.raw(), "raw");
    }

    #[test]
    fn serializes_range_quote() {
        let range = Range::new("01000-000", "02000", 5, Decimal::new(1050, 2)).unwrap();
        let quote = ShippingQuote::new(Some(range.time()), Some(range.cost()), range);

        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["time"], 5);
        assert_eq!(json["cost"], "10.50");
        assert_eq!(json["raw"]["start"], "01000");
        assert_eq!(json["raw"]["end"], "02000");
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let json = serde_json::to_value(ShippingQuote::new(None, None, ())).unwrap();
        assert!(json["time"].is_null());
        assert!(json["cost"].is_null());
    }
}
