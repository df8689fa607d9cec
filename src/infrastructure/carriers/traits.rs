//! # Quote Transport Trait
//!
//! Port definition for the network exchange behind a carrier quote.
//!
//! The client builds the query and interprets the body; a [`QuoteTransport`]
//! only moves bytes. Implementations make exactly one attempt per call.
//!
//! # Examples
//!
//! ```
//! use async_trait::async_trait;
//! use frete::infrastructure::carriers::error::CarrierResult;
//! use frete::infrastructure::carriers::traits::{QueryParams, QuoteTransport};
//!
//! #[derive(Debug)]
//! struct Canned(&'static [u8]);
//!
//! #[async_trait]
//! impl QuoteTransport for Canned {
//!     async fn get(&self, _url: &str, _query: &QueryParams) -> CarrierResult<Vec<u8>> {
//!         Ok(self.0.to_vec())
//!     }
//! }
//! ```

use crate::infrastructure::carriers::error::CarrierResult;
use async_trait::async_trait;
use std::fmt;

/// Ordered query-string pairs.
pub type QueryParams = Vec<(&'static str, String)>;

/// Issues a single GET and returns the raw response body.
///
/// The body is left undecoded; its XML prolog names the character set.
#[async_trait]
pub trait QuoteTransport: Send + Sync + fmt::Debug {
    /// Sends `query` to `url`.
    ///
    /// An empty body is returned as-is; the caller decides what it means.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Transport` if the exchange fails.
    async fn get(&self, url: &str, query: &QueryParams) -> CarrierResult<Vec<u8>>;
}
