//! # Correios Client
//!
//! Remote price/deadline quotes from the Correios calculator.
//!
//! [`CorreiosClient`] wraps a [`QuoteRequest`], turns it into the
//! calculator's query string, performs one exchange through a
//! [`QuoteTransport`] and keys the readable service entries by
//! [`ServiceCode`]. The result is computed on the first call to
//! [`CorreiosClient::result`] and returned from memory afterwards; a new
//! query needs a new client.
//!
//! Entries the carrier marks with a non-zero `Erro` are dropped silently.
//!
//! # Examples
//!
//! ```
//! use async_trait::async_trait;
//! use frete::domain::value_objects::enums::{PackageFormat, ServiceCode};
//! use frete::infrastructure::carriers::correios::CorreiosClient;
//! use frete::infrastructure::carriers::error::CarrierResult;
//! use frete::infrastructure::carriers::traits::{QueryParams, QuoteTransport};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Canned;
//!
//! #[async_trait]
//! impl QuoteTransport for Canned {
//!     async fn get(&self, _url: &str, _query: &QueryParams) -> CarrierResult<Vec<u8>> {
//!         Ok(b"<Servicos><cServico><Codigo>41106</Codigo><Valor>18,90</Valor>\
//!             <PrazoEntrega>6</PrazoEntrega><Erro>0</Erro></cServico></Servicos>"
//!             .to_vec())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = CorreiosClient::new("01310-100", Arc::new(Canned))?
//!     .destination("20040-020")?
//!     .service(ServiceCode::PAC.get())?
//!     .weight(Decimal::ONE)?
//!     .format(PackageFormat::Box)
//!     .dimensions(Decimal::from(20), Decimal::from(15), None, None)?;
//!
//! let quotes = tokio_test::block_on(client.result())?;
//! assert_eq!(quotes[&ServiceCode::PAC].time(), Some(6));
//! assert_eq!(quotes[&ServiceCode::PAC].cost(), Some(Decimal::new(1890, 2)));
//! # Ok(())
//! # }
//! ```

use crate::domain::entities::quote_request::{Contract, QuoteRequest};
use crate::domain::entities::shipping_quote::ShippingQuote;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::enums::{EstimateKind, PackageFormat, ServiceCode};
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::http_client::HttpTransport;
use crate::infrastructure::carriers::response::{ServiceEntry, parse_response};
use crate::infrastructure::carriers::traits::{QueryParams, QuoteTransport};
use crate::infrastructure::config::{CorreiosConfig, DEFAULT_ENDPOINT};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Response format requested from the calculator.
const RETURN_FORMAT: &str = "XML";

/// Quotes keyed by carrier service.
pub type QuoteMap = BTreeMap<ServiceCode, ShippingQuote<ServiceEntry>>;

/// Correios price/deadline client.
#[derive(Debug)]
pub struct CorreiosClient {
    request: QuoteRequest,
    transport: Arc<dyn QuoteTransport>,
    endpoint: String,
    result: Option<QuoteMap>,
}

impl CorreiosClient {
    /// Creates a client quoting from `origin` over `transport`.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` if `origin` is not a full CEP.
    pub fn new(origin: &str, transport: Arc<dyn QuoteTransport>) -> CarrierResult<Self> {
        Ok(Self::from_request(QuoteRequest::new(origin)?, transport))
    }

    /// Creates a client for an already built request.
    #[must_use]
    pub fn from_request(request: QuoteRequest, transport: Arc<dyn QuoteTransport>) -> Self {
        Self {
            request,
            transport,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            result: None,
        }
    }

    /// Creates an HTTP-backed client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` for an invalid `origin` or
    /// `CarrierError::Transport` if the HTTP client cannot be built.
    pub fn from_config(origin: &str, config: &CorreiosConfig) -> CarrierResult<Self> {
        let transport = Arc::new(HttpTransport::from_config(config)?);
        let mut client = Self::new(origin, transport)?.with_endpoint(config.endpoint());
        if let Some(contract) = config.contract() {
            client = client.with_contract(contract);
        }
        Ok(client)
    }

    /// Overrides the calculator URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the contract credentials.
    #[must_use]
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.request = self.request.with_contract(contract);
        self
    }

    /// Sets what the carrier should estimate.
    #[must_use]
    pub fn estimate(mut self, kind: EstimateKind) -> Self {
        self.request = self.request.estimate(kind);
        self
    }

    /// Sets the destination.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` if `value` is not a full CEP.
    pub fn destination(mut self, value: &str) -> CarrierResult<Self> {
        self.request = self.request.destination(value)?;
        Ok(self)
    }

    /// Adds a carrier service.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` if `id` is zero.
    pub fn service(mut self, id: u32) -> CarrierResult<Self> {
        self.request = self.request.service(id)?;
        Ok(self)
    }

    /// Sets the package weight in kilograms.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` unless `value` is positive.
    pub fn weight(mut self, value: Decimal) -> CarrierResult<Self> {
        self.request = self.request.weight(value)?;
        Ok(self)
    }

    /// Sets the package format.
    #[must_use]
    pub fn format(mut self, format: PackageFormat) -> Self {
        self.request = self.request.format(format);
        self
    }

    /// Sets the package format from its carrier code.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` for codes other than 1, 2 or 3.
    pub fn format_code(mut self, code: u8) -> CarrierResult<Self> {
        self.request = self.request.format_code(code)?;
        Ok(self)
    }

    /// Sets the package measurements.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Validation` unless length and width are positive.
    pub fn dimensions(
        mut self,
        length: Decimal,
        width: Decimal,
        height: Option<Decimal>,
        diameter: Option<Decimal>,
    ) -> CarrierResult<Self> {
        self.request = self.request.dimensions(length, width, height, diameter)?;
        Ok(self)
    }

    /// Requests hand delivery to the addressee.
    #[must_use]
    pub fn in_person(mut self, enable: bool) -> Self {
        self.request = self.request.in_person(enable);
        self
    }

    /// Declares a value for insurance.
    #[must_use]
    pub fn insurance(mut self, value: Decimal) -> Self {
        self.request = self.request.insurance(value);
        self
    }

    /// Requests a delivery receipt.
    #[must_use]
    pub fn notify_on_delivery(mut self, enable: bool) -> Self {
        self.request = self.request.notify_on_delivery(enable);
        self
    }

    /// Returns the accumulated request.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    /// Returns the calculator URL.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns true once a result has been computed.
    #[inline]
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the quotes, querying the carrier on the first call only.
    ///
    /// A failed query caches nothing.
    ///
    /// # Errors
    ///
    /// - `CarrierError::MissingService` / `MissingDestination` if the request
    ///   is incomplete
    /// - `CarrierError::Validation` if weight, format or dimensions are unset
    /// - `CarrierError::Transport` if the exchange fails or returns nothing
    /// - `CarrierError::Parse` if the body is not a price/deadline document
    pub async fn result(&mut self) -> CarrierResult<&QuoteMap> {
        let quotes = match self.result.take() {
            Some(cached) => cached,
            None => self.inquire().await?,
        };
        let quotes: &QuoteMap = self.result.insert(quotes);
        Ok(quotes)
    }

    /// Performs the exchange and interprets the response.
    async fn inquire(&self) -> CarrierResult<QuoteMap> {
        let query = build_query(&self.request)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            origin = %self.request.origin(),
            services = query_value(&query, "nCdServico"),
            "querying carrier"
        );

        let body = self.transport.get(&self.endpoint, &query).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(CarrierError::transport("Got no response from API"));
        }

        let quotes = collect_quotes(parse_response(&body)?);

        tracing::info!(
            requested = self.request.services().len(),
            quoted = quotes.len(),
            "carrier quotes received"
        );

        Ok(quotes)
    }
}

/// Builds the calculator query for `request`.
///
/// # Errors
///
/// Returns a state error when no service or destination is configured, and
/// `CarrierError::Validation` when the package is incomplete.
pub fn build_query(request: &QuoteRequest) -> CarrierResult<QueryParams> {
    if request.services().is_empty() {
        return Err(CarrierError::MissingService);
    }
    let destination = request
        .destination_code()
        .ok_or(CarrierError::MissingDestination)?;

    request.validate_package()?;
    let weight = request
        .weight_value()
        .ok_or_else(|| DomainError::invalid_weight(""))?;
    let format = request
        .format_value()
        .ok_or_else(|| DomainError::invalid_format(""))?;
    let dimensions = request.dimensions_value();
    let optional = request.optional();
    let contract = request.contract();

    let services = request
        .services()
        .iter()
        .map(ServiceCode::to_string)
        .collect::<Vec<_>>()
        .join(",");

    Ok(vec![
        ("nCdEmpresa", contract.code().unwrap_or_default().to_owned()),
        ("sDsSenha", contract.password().unwrap_or_default().to_owned()),
        ("nCdServico", services),
        ("sCepOrigem", request.origin().to_string()),
        ("sCepDestino", destination.to_string()),
        ("nVlPeso", decimal(weight)),
        ("nCdFormato", format.code().to_string()),
        ("nVlComprimento", decimal(dimensions.length)),
        ("nVlAltura", decimal(dimensions.height)),
        ("nVlLargura", decimal(dimensions.width)),
        ("nVlDiametro", decimal(dimensions.diameter)),
        ("sCdMaoPropria", flag(optional.in_person)),
        ("nVlValorDeclarado", decimal(optional.insurance_value)),
        ("sCdAvisoRecebimento", flag(optional.notify_on_delivery)),
        ("StrRetorno", RETURN_FORMAT.to_owned()),
        ("nIndicaCalculo", request.estimate_kind().code().to_string()),
    ])
}

/// Keys readable entries by service code, dropping carrier-flagged ones.
///
/// A later entry for the same code replaces an earlier one.
fn collect_quotes(entries: Vec<ServiceEntry>) -> QuoteMap {
    let mut quotes = QuoteMap::new();

    for entry in entries {
        if entry.is_error() {
            tracing::debug!(
                code = entry.get("Codigo").unwrap_or_default(),
                error = entry.error_code(),
                message = entry.error_message().unwrap_or_default(),
                "carrier rejected service"
            );
            continue;
        }

        let Some(code) = entry.service_code() else {
            tracing::warn!(
                code = entry.get("Codigo").unwrap_or_default(),
                "skipping service entry without a valid code"
            );
            continue;
        };

        let quote = ShippingQuote::new(entry.delivery_days(), entry.value(), entry);
        quotes.insert(code, quote);
    }

    quotes
}

fn decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn flag(enabled: bool) -> String {
    let value = if enabled { "S" } else { "N" };
    value.to_owned()
}

fn query_value<'a>(query: &'a QueryParams, key: &str) -> &'a str {
    query
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}
