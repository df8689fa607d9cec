//! # Postal Codes
//!
//! CEP normalization and validation.
//!
//! Two validation rules exist side by side:
//!
//! - [`validate_cep`] is strict: it accepts `NNNNN-NNN` or `NNNNNNNN` and
//!   yields the full 8-digit [`PostalCode`]. Request endpoints use it.
//! - [`validate_cep_prefix`] is prefix-tolerant: it accepts 5 digits with an
//!   optional `-NNN`/`NNN` suffix and yields only the 5-digit
//!   [`PostalPrefix`]. Range tables use it, since their bounds are
//!   low-resolution.
//!
//! # Examples
//!
//! ```
//! use frete::domain::value_objects::postal_code::{validate_cep, validate_cep_prefix};
//!
//! assert_eq!(validate_cep("01310-100").unwrap().as_str(), "01310100");
//! assert_eq!(validate_cep("01310100").unwrap().as_str(), "01310100");
//! assert!(validate_cep("01310").is_none());
//!
//! assert_eq!(validate_cep_prefix("01310").unwrap().as_str(), "01310");
//! assert_eq!(validate_cep_prefix("01310-100").unwrap().as_str(), "01310");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const PREFIX_LEN: usize = 5;
const SUFFIX_LEN: usize = 3;

/// A normalized 8-digit CEP, stored without separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validates `value` with the strict rule.
    ///
    /// `field` names the argument in the error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if `value` is not a CEP.
    pub fn parse(field: &'static str, value: &str) -> DomainResult<Self> {
        validate_cep(value).ok_or_else(|| DomainError::invalid_postal_code(field, value))
    }

    /// Returns the 8 digits.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 5-digit prefix.
    #[must_use]
    pub fn prefix(&self) -> PostalPrefix {
        PostalPrefix(self.0.chars().take(PREFIX_LEN).collect())
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PostalCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("cep", s)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The 5-digit leading component of a CEP.
///
/// Ordering is lexicographic on the digits, which for equal-length digit
/// strings is numeric order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalPrefix(String);

impl PostalPrefix {
    /// Validates `value` with the prefix-tolerant rule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if `value` does not start
    /// with 5 digits followed by nothing or a 3-digit suffix.
    pub fn parse(field: &'static str, value: &str) -> DomainResult<Self> {
        validate_cep_prefix(value).ok_or_else(|| DomainError::invalid_postal_code(field, value))
    }

    /// Returns the 5 digits.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&PostalCode> for PostalPrefix {
    fn from(code: &PostalCode) -> Self {
        code.prefix()
    }
}

/// Normalizes a CEP in `NNNNN-NNN` or `NNNNNNNN` form.
///
/// Returns `None` on any other shape.
#[must_use]
pub fn validate_cep(value: &str) -> Option<PostalCode> {
    let (prefix, suffix) = split(value)?;
    let suffix = suffix?;
    Some(PostalCode(format!("{prefix}{suffix}")))
}

/// Validates a CEP whose 3-digit suffix is optional and returns its prefix.
///
/// The suffix is checked when present but never kept.
#[must_use]
pub fn validate_cep_prefix(value: &str) -> Option<PostalPrefix> {
    let (prefix, _) = split(value)?;
    Some(PostalPrefix(prefix.to_owned()))
}

/// Splits `NNNNN[-]NNN` or `NNNNN` into its digit groups.
fn split(value: &str) -> Option<(&str, Option<&str>)> {
    if value.len() < PREFIX_LEN || !value.is_char_boundary(PREFIX_LEN) {
        return None;
    }
    let (prefix, rest) = value.split_at(PREFIX_LEN);
    if !all_digits(prefix) {
        return None;
    }
    if rest.is_empty() {
        return Some((prefix, None));
    }
    let suffix = rest.strip_prefix('-').unwrap_or(rest);
    if suffix.len() == SUFFIX_LEN && all_digits(suffix) {
        Some((prefix, Some(suffix)))
    } else {
        None
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
