//! # Domain Enums
//!
//! Enumeration types for shipping request parameters.
//!
//! - [`PackageFormat`] - Box, prism (roll) or envelope
//! - [`EstimateKind`] - Price only, delivery time only, or both
//! - [`ServiceCode`] - Carrier service tier identifier
//!
//! Each type carries the integer code the carrier expects on the wire and
//! implements `Display`, `FromStr` and `TryFrom` for its code.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical package format.
///
/// # Examples
///
/// ```
/// use frete::domain::value_objects::enums::PackageFormat;
///
/// assert_eq!(PackageFormat::Box.code(), 1);
/// assert_eq!(PackageFormat::try_from(3).unwrap(), PackageFormat::Envelope);
/// assert!(PackageFormat::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PackageFormat {
    /// Box or package.
    Box = 1,
    /// Prism or roll.
    Prism = 2,
    /// Envelope.
    Envelope = 3,
}

impl PackageFormat {
    /// Returns the carrier code for this format.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PackageFormat {
    type Error = DomainError;

    fn try_from(code: u8) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::Box),
            2 => Ok(Self::Prism),
            3 => Ok(Self::Envelope),
            other => Err(DomainError::invalid_format(other)),
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => write!(f, "BOX"),
            Self::Prism => write!(f, "PRISM"),
            Self::Envelope => write!(f, "ENVELOPE"),
        }
    }
}

impl FromStr for PackageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BOX" | "1" => Ok(Self::Box),
            "PRISM" | "ROLL" | "2" => Ok(Self::Prism),
            "ENVELOPE" | "3" => Ok(Self::Envelope),
            _ => Err(DomainError::invalid_format(s)),
        }
    }
}

/// What a quote request asks the carrier to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum EstimateKind {
    /// Price only.
    Price = 1,
    /// Delivery time only.
    Time = 2,
    /// Price and delivery time.
    #[default]
    Both = 3,
}

impl EstimateKind {
    /// Returns the carrier code for this kind.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EstimateKind {
    type Error = DomainError;

    fn try_from(code: u8) -> DomainResult<Self> {
        match code {
            1 => Ok(Self::Price),
            2 => Ok(Self::Time),
            3 => Ok(Self::Both),
            other => Err(DomainError::invalid_estimate_kind(other)),
        }
    }
}

impl fmt::Display for EstimateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "PRICE"),
            Self::Time => write!(f, "TIME"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}

impl FromStr for EstimateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PRICE" | "1" => Ok(Self::Price),
            "TIME" | "2" => Ok(Self::Time),
            "BOTH" | "3" => Ok(Self::Both),
            _ => Err(DomainError::invalid_estimate_kind(s)),
        }
    }
}

/// A carrier service tier identifier.
///
/// Always non-zero.
///
/// # Examples
///
/// ```
/// use frete::domain::value_objects::enums::ServiceCode;
///
/// let sedex: ServiceCode = "40010".parse().unwrap();
/// assert_eq!(sedex, ServiceCode::SEDEX);
/// assert!("0".parse::<ServiceCode>().is_err());
/// assert!("pac".parse::<ServiceCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCode(u32);

impl ServiceCode {
    /// SEDEX express delivery.
    pub const SEDEX: Self = Self(40010);
    /// SEDEX with cash on delivery.
    pub const SEDEX_A_COBRAR: Self = Self(40045);
    /// SEDEX delivered by 10am next business day.
    pub const SEDEX_10: Self = Self(40215);
    /// SEDEX same-day delivery.
    pub const SEDEX_HOJE: Self = Self(40290);
    /// PAC standard delivery.
    pub const PAC: Self = Self(41106);

    /// Creates a service code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidService` if `id` is zero.
    pub fn new(id: u32) -> DomainResult<Self> {
        if id == 0 {
            return Err(DomainError::invalid_service(id));
        }
        Ok(Self(id))
    }

    /// Returns the numeric ID.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ServiceCode {
    type Error = DomainError;

    fn try_from(id: u32) -> DomainResult<Self> {
        Self::new(id)
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::invalid_service(s))?;
        Self::new(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod package_format {
        use super::*;

        #[test]
        fn wire_codes() {
            assert_eq!(PackageFormat::Box.code(), 1);
            assert_eq!(PackageFormat::Prism.code(), 2);
            assert_eq!(PackageFormat::Envelope.code(), 3);
        }

        #[test]
        fn rejects_unknown_code() {
            assert_eq!(
                PackageFormat::try_from(0).unwrap_err(),
                DomainError::invalid_format(0)
            );
        }

        #[test]
        fn from_str() {
            assert_eq!("box".parse::<PackageFormat>().unwrap(), PackageFormat::Box);
            assert_eq!("2".parse::<PackageFormat>().unwrap(), PackageFormat::Prism);
            assert!("crate".parse::<PackageFormat>().is_err());
        }
    }

    mod estimate_kind {
        use super::*;

        #[test]
        fn defaults_to_both() {
            assert_eq!(EstimateKind::default(), EstimateKind::Both);
            assert_eq!(EstimateKind::default().code(), 3);
        }

        #[test]
        fn round_trips_codes() {
            for kind in [EstimateKind::Price, EstimateKind::Time, EstimateKind::Both] {
                assert_eq!(EstimateKind::try_from(kind.code()).unwrap(), kind);
            }
            assert!(EstimateKind::try_from(4).is_err());
        }
    }

    mod service_code {
        use super::*;

        #[test]
        fn constants() {
            assert_eq!(ServiceCode::SEDEX.get(), 40010);
            assert_eq!(ServiceCode::SEDEX_A_COBRAR.get(), 40045);
            assert_eq!(ServiceCode::SEDEX_10.get(), 40215);
            assert_eq!(ServiceCode::SEDEX_HOJE.get(), 40290);
            assert_eq!(ServiceCode::PAC.get(), 41106);
        }

        #[test]
        fn rejects_zero() {
            assert_eq!(ServiceCode::new(0).unwrap_err(), DomainError::invalid_service(0));
        }

        #[test]
        fn rejects_non_numeric() {
            assert!("4001O".parse::<ServiceCode>().is_err());
            assert!("".parse::<ServiceCode>().is_err());
            assert!("-1".parse::<ServiceCode>().is_err());
        }

        #[test]
        fn parses_with_whitespace() {
            assert_eq!(" 41106 ".parse::<ServiceCode>().unwrap(), ServiceCode::PAC);
        }
    }
}
