//! # Carrier Integrations
//!
//! Remote quote clients and the transport they run over.
//!
//! - [`CorreiosClient`]: Correios price/deadline calculator
//! - [`QuoteTransport`]: Port for the single network exchange
//! - [`HttpTransport`]: `reqwest` implementation of the port

pub mod correios;
pub mod error;
pub mod http_client;
pub mod response;
pub mod traits;

pub use correios::{CorreiosClient, QuoteMap};
pub use error::{CarrierError, CarrierResult};
pub use http_client::HttpTransport;
pub use response::ServiceEntry;
pub use traits::{QueryParams, QuoteTransport};
