//! # Carrier Errors
//!
//! Error types for remote carrier quotes.
//!
//! The taxonomy separates caller mistakes from environment failures:
//!
//! ```text
//! CarrierError
//! ├── Validation(DomainError) - Rejected input
//! ├── MissingService          - Quoted with no service configured
//! ├── MissingDestination      - Quoted with no destination configured
//! ├── Transport               - The exchange produced no response
//! └── Parse                   - The response is not the expected document
//! ```
//!
//! Service entries the carrier flags as erroneous are never reported here;
//! they are simply absent from the result.
//!
//! # Examples
//!
//! ```
//! use frete::infrastructure::carriers::error::CarrierError;
//!
//! let error = CarrierError::transport("connection refused");
//! assert!(error.is_transport_error());
//! assert!(!error.is_state_error());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Error type for carrier quote operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarrierError {
    /// Input rejected by a configuration setter or package re-validation.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// No service was configured before quoting.
    #[error("there is no service to inquire")]
    MissingService,

    /// No destination was configured before quoting.
    #[error("there is no destination CEP code to inquire")]
    MissingDestination,

    /// The transport produced no response.
    #[error("carrier transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// The response could not be read as a price/deadline document.
    #[error("carrier response parse error: {message}")]
    Parse {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Returns true if the caller supplied invalid input.
    #[must_use]
    pub fn is_input_rejection(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the caller quoted before configuring the request.
    #[must_use]
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::MissingService | Self::MissingDestination)
    }

    /// Returns true if the exchange with the carrier failed.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true if the carrier's response was unreadable.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
