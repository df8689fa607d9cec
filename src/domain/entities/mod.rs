//! # Domain Entities
//!
//! - [`Range`]: CEP interval with a flat time and cost
//! - [`ShippingQuote`]: A time/cost estimate with its source payload
//! - [`QuoteRequest`]: Parameters for a carrier query

pub mod quote_request;
pub mod range;
pub mod shipping_quote;

pub use quote_request::{Contract, Dimensions, OptionalServices, QuoteRequest};
pub use range::Range;
pub use shipping_quote::ShippingQuote;
