//! # Domain Errors
//!
//! Input rejections raised while building shipping requests and range tables.
//!
//! Every configuration call validates eagerly; a [`DomainError`] means the
//! caller supplied a value that can never produce a quote, so it is never
//! retryable.
//!
//! # Examples
//!
//! ```
//! use frete::domain::errors::DomainError;
//!
//! let error = DomainError::invalid_postal_code("destination", "1234");
//! assert_eq!(error.field(), "destination");
//! assert!(error.to_string().contains("1234"));
//! ```

use thiserror::Error;

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A CEP did not match the accepted shapes.
    #[error("invalid {field} CEP code: {value:?}")]
    InvalidPostalCode {
        /// Which argument carried the CEP (`origin`, `destination`, `start`, `end`).
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A carrier service ID was zero or not an integer.
    #[error("invalid service ID: {value:?}")]
    InvalidService {
        /// The rejected input.
        value: String,
    },

    /// The package weight was zero or not a number.
    #[error("invalid weight: {value:?}")]
    InvalidWeight {
        /// The rejected input.
        value: String,
    },

    /// The package format code is not one of box, prism or envelope.
    #[error("invalid package format: {value:?}")]
    InvalidFormat {
        /// The rejected input.
        value: String,
    },

    /// A mandatory package dimension was missing or zero.
    #[error("invalid {field}: {value:?}")]
    InvalidDimension {
        /// `length` or `width`.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The estimate kind code is not price, time or both.
    #[error("invalid estimate kind: {value:?}")]
    InvalidEstimateKind {
        /// The rejected input.
        value: String,
    },
}

impl DomainError {
    /// Creates an invalid postal code error.
    #[must_use]
    pub fn invalid_postal_code(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidPostalCode {
            field,
            value: value.into(),
        }
    }

    /// Creates an invalid service error.
    #[must_use]
    pub fn invalid_service(value: impl ToString) -> Self {
        Self::InvalidService {
            value: value.to_string(),
        }
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(value: impl ToString) -> Self {
        Self::InvalidWeight {
            value: value.to_string(),
        }
    }

    /// Creates an invalid format error.
    #[must_use]
    pub fn invalid_format(value: impl ToString) -> Self {
        Self::InvalidFormat {
            value: value.to_string(),
        }
    }

    /// Creates an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidDimension {
            field,
            value: value.to_string(),
        }
    }

    /// Creates an invalid estimate kind error.
    #[must_use]
    pub fn invalid_estimate_kind(value: impl ToString) -> Self {
        Self::InvalidEstimateKind {
            value: value.to_string(),
        }
    }

    /// Returns the name of the rejected argument.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidPostalCode { field, .. } | Self::InvalidDimension { field, .. } => field,
            Self::InvalidService { .. } => "service",
            Self::InvalidWeight { .. } => "weight",
            Self::InvalidFormat { .. } => "format",
            Self::InvalidEstimateKind { .. } => "estimate",
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
