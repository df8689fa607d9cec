//! # Quote Request
//!
//! Accumulated parameters for a carrier price/deadline query.
//!
//! A [`QuoteRequest`] is built with consuming setters. Setters that take
//! unchecked input validate it immediately and return a [`DomainResult`], so
//! the first bad value aborts the chain with `?`.
//!
//! # Examples
//!
//! ```
//! use frete::domain::entities::quote_request::QuoteRequest;
//! use frete::domain::value_objects::enums::{PackageFormat, ServiceCode};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), frete::domain::errors::DomainError> {
//! let request = QuoteRequest::new("01310-100")?
//!     .destination("20040020")?
//!     .service(ServiceCode::SEDEX.get())?
//!     .service(ServiceCode::PAC.get())?
//!     .weight(Decimal::new(15, 1))?
//!     .format(PackageFormat::Box)
//!     .dimensions(Decimal::from(20), Decimal::from(15), Some(Decimal::from(10)), None)?
//!     .notify_on_delivery(true);
//!
//! assert_eq!(request.services(), &[ServiceCode::SEDEX, ServiceCode::PAC]);
//! # Ok(())
//! # }
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::enums::{EstimateKind, PackageFormat, ServiceCode};
use crate::domain::value_objects::postal_code::PostalCode;
use rust_decimal::Decimal;

/// Package measurements in centimetres.
///
/// Height and diameter default to zero when not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Length.
    pub length: Decimal,
    /// Width.
    pub width: Decimal,
    /// Height.
    pub height: Decimal,
    /// Diameter, for prisms.
    pub diameter: Decimal,
}

impl Dimensions {
    /// Validates measurements. Length and width must be positive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimension` naming `length` or `width`.
    pub fn new(
        length: Decimal,
        width: Decimal,
        height: Option<Decimal>,
        diameter: Option<Decimal>,
    ) -> DomainResult<Self> {
        if length <= Decimal::ZERO {
            return Err(DomainError::invalid_dimension("length", length));
        }
        if width <= Decimal::ZERO {
            return Err(DomainError::invalid_dimension("width", width));
        }
        Ok(Self {
            length,
            width,
            height: height.unwrap_or_default(),
            diameter: diameter.unwrap_or_default(),
        })
    }
}

/// Carrier contract credentials, passed through verbatim.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Contract {
    code: Option<String>,
    password: Option<String>,
}

impl Contract {
    /// Creates credentials.
    #[must_use]
    pub fn new(code: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            password: Some(password.into()),
        }
    }

    /// Returns the contract code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the contract password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl std::fmt::Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("code", &self.code)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Add-on services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalServices {
    /// Hand delivery to the addressee only.
    pub in_person: bool,
    /// Declared value for insurance; zero means none.
    pub insurance_value: Decimal,
    /// Delivery receipt returned to the sender.
    pub notify_on_delivery: bool,
}

/// Parameters for a carrier quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    origin: PostalCode,
    destination: Option<PostalCode>,
    weight: Option<Decimal>,
    format: Option<PackageFormat>,
    dimensions: Dimensions,
    services: Vec<ServiceCode>,
    contract: Contract,
    optional: OptionalServices,
    estimate: EstimateKind,
}

impl QuoteRequest {
    /// Starts a request from `origin`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if `origin` is not a full CEP.
    pub fn new(origin: &str) -> DomainResult<Self> {
        Ok(Self {
            origin: PostalCode::parse("origin", origin)?,
            destination: None,
            weight: None,
            format: None,
            dimensions: Dimensions::default(),
            services: Vec::new(),
            contract: Contract::default(),
            optional: OptionalServices::default(),
            estimate: EstimateKind::default(),
        })
    }

    /// Sets the contract credentials.
    #[must_use]
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// Sets what the carrier should estimate.
    #[must_use]
    pub fn estimate(mut self, kind: EstimateKind) -> Self {
        self.estimate = kind;
        self
    }

    /// Sets the estimate kind from its carrier code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEstimateKind` for codes other than 1, 2 or 3.
    pub fn estimate_code(self, code: u8) -> DomainResult<Self> {
        Ok(self.estimate(EstimateKind::try_from(code)?))
    }

    /// Sets the destination.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if `value` is not a full CEP.
    pub fn destination(mut self, value: &str) -> DomainResult<Self> {
        self.destination = Some(PostalCode::parse("destination", value)?);
        Ok(self)
    }

    /// Adds a carrier service. Repeated IDs are kept once, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidService` if `id` is zero.
    pub fn service(mut self, id: u32) -> DomainResult<Self> {
        let code = ServiceCode::new(id)?;
        if !self.services.contains(&code) {
            self.services.push(code);
        }
        Ok(self)
    }

    /// Sets the package weight in kilograms.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` unless `value` is positive.
    pub fn weight(mut self, value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid_weight(value));
        }
        self.weight = Some(value);
        Ok(self)
    }

    /// Sets the package format.
    #[must_use]
    pub fn format(mut self, format: PackageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the package format from its carrier code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` for codes other than 1, 2 or 3.
    pub fn format_code(self, code: u8) -> DomainResult<Self> {
        Ok(self.format(PackageFormat::try_from(code)?))
    }

    /// Sets the package measurements.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimension` unless length and width are positive.
    pub fn dimensions(
        mut self,
        length: Decimal,
        width: Decimal,
        height: Option<Decimal>,
        diameter: Option<Decimal>,
    ) -> DomainResult<Self> {
        self.dimensions = Dimensions::new(length, width, height, diameter)?;
        Ok(self)
    }

    /// Requests hand delivery to the addressee.
    #[must_use]
    pub fn in_person(mut self, enable: bool) -> Self {
        self.optional.in_person = enable;
        self
    }

    /// Declares a value for insurance.
    #[must_use]
    pub fn insurance(mut self, value: Decimal) -> Self {
        self.optional.insurance_value = value;
        self
    }

    /// Requests a delivery receipt.
    #[must_use]
    pub fn notify_on_delivery(mut self, enable: bool) -> Self {
        self.optional.notify_on_delivery = enable;
        self
    }

    /// Re-checks the package attributes as their setters would.
    ///
    /// Weight, format, length and width have no usable defaults, so a
    /// request that never set them fails here.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` among weight, format and dimensions.
    pub fn validate_package(&self) -> DomainResult<()> {
        match self.weight {
            Some(weight) if weight > Decimal::ZERO => {}
            other => {
                return Err(DomainError::invalid_weight(
                    other.map(|w| w.to_string()).unwrap_or_default(),
                ));
            }
        }
        if self.format.is_none() {
            return Err(DomainError::invalid_format(""));
        }
        let d = self.dimensions;
        Dimensions::new(d.length, d.width, Some(d.height), Some(d.diameter))?;
        Ok(())
    }

    /// Returns the origin.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &PostalCode {
        &self.origin
    }

    /// Returns the destination, if set.
    #[inline]
    #[must_use]
    pub fn destination_code(&self) -> Option<&PostalCode> {
        self.destination.as_ref()
    }

    /// Returns the requested services in insertion order.
    #[inline]
    #[must_use]
    pub fn services(&self) -> &[ServiceCode] {
        &self.services
    }

    /// Returns the weight, if set.
    #[inline]
    #[must_use]
    pub fn weight_value(&self) -> Option<Decimal> {
        self.weight
    }

    /// Returns the package format, if set.
    #[inline]
    #[must_use]
    pub fn format_value(&self) -> Option<PackageFormat> {
        self.format
    }

    /// Returns the measurements.
    #[inline]
    #[must_use]
    pub fn dimensions_value(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the contract credentials.
    #[inline]
    #[must_use]
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Returns the add-on services.
    #[inline]
    #[must_use]
    pub fn optional(&self) -> &OptionalServices {
        &self.optional
    }

    /// Returns the estimate kind.
    #[inline]
    #[must_use]
    pub fn estimate_kind(&self) -> EstimateKind {
        self.estimate
    }
}
