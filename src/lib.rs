//! # frete
//!
//! Shipping time and cost estimates for Brazilian postal codes (CEPs).
//!
//! Two interchangeable strategies are provided:
//!
//! - [`RangeMatcher`]: a local table of CEP ranges with a flat time and cost
//!   per range, evaluated in memory
//! - [`CorreiosClient`]: a remote query to the Correios price/deadline
//!   calculator, one exchange per client
//!
//! ## Layers
//!
//! - [`domain`]: CEP validation, request parameters, quote types
//! - [`application`]: the range matcher
//! - [`infrastructure`]: carrier client, HTTP transport, configuration, tracing
//!
//! # Examples
//!
//! ```
//! use frete::RangeMatcher;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), frete::DomainError> {
//! let quotes = RangeMatcher::new("01500-000")?
//!     .add_range("01000-000", "02000-000", 5, Decimal::new(1000, 2))?
//!     .result();
//!
//! assert_eq!(quotes.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::RangeMatcher;
pub use domain::entities::{QuoteRequest, Range, ShippingQuote};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::value_objects::{EstimateKind, PackageFormat, PostalCode, ServiceCode};
pub use infrastructure::carriers::{CarrierError, CarrierResult, CorreiosClient, QuoteTransport};
pub use infrastructure::config::CorreiosConfig;
