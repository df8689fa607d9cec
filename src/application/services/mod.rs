//! # Application Services
//!
//! - [`RangeMatcher`]: Local CEP-range estimates

pub mod range_matcher;

pub use range_matcher::RangeMatcher;
