//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`PostalCode`], [`PostalPrefix`]: Normalized CEPs
//! - [`PackageFormat`], [`EstimateKind`], [`ServiceCode`]: Carrier request codes

pub mod enums;
pub mod postal_code;

pub use enums::{EstimateKind, PackageFormat, ServiceCode};
pub use postal_code::{PostalCode, PostalPrefix, validate_cep, validate_cep_prefix};
