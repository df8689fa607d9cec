//! # Domain Layer
//!
//! Postal codes, request parameters and quote types. Pure, with no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
