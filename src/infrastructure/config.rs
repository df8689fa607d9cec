//! # Carrier Configuration
//!
//! Endpoint, timeout and contract credentials for the Correios client.
//!
//! Values come from defaults, optionally overridden by `CORREIOS_*`
//! environment variables (a `.env` file is honoured):
//!
//! | variable | field |
//! |---|---|
//! | `CORREIOS_ENDPOINT` | `endpoint` |
//! | `CORREIOS_TIMEOUT_MS` | `timeout_ms` |
//! | `CORREIOS_CONTRACT_CODE` | `contract_code` |
//! | `CORREIOS_CONTRACT_PASSWORD` | `contract_password` |
//!
//! # Examples
//!
//! ```
//! use frete::infrastructure::config::CorreiosConfig;
//!
//! let config = CorreiosConfig::default()
//!     .with_timeout_ms(3000)
//!     .with_contract("08082650", "secret");
//!
//! assert_eq!(config.timeout_ms(), 3000);
//! assert!(config.contract().is_some());
//! ```

use crate::domain::entities::quote_request::Contract;
use serde::Deserialize;
use std::fmt;

/// Price/deadline calculator endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.aspx";

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable prefix.
const ENV_PREFIX: &str = "CORREIOS";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Settings for [`CorreiosClient`](crate::infrastructure::carriers::correios::CorreiosClient).
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CorreiosConfig {
    /// Calculator URL.
    #[serde(default = "default_endpoint")]
    endpoint: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
    /// Contract code, if the sender has one.
    #[serde(default)]
    contract_code: Option<String>,
    /// Contract password.
    #[serde(default)]
    contract_password: Option<String>,
}

impl Default for CorreiosConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            contract_code: None,
            contract_password: None,
        }
    }
}

impl CorreiosConfig {
    /// Loads `.env`, then layers `CORREIOS_*` variables over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a variable has the wrong type.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "failed to read .env file");
            }
        }
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Layers `environment` over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a value has the wrong type.
    pub fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Sets the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the contract credentials.
    #[must_use]
    pub fn with_contract(mut self, code: impl Into<String>, password: impl Into<String>) -> Self {
        self.contract_code = Some(code.into());
        self.contract_password = Some(password.into());
        self
    }

    /// Returns the endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the contract credentials when a code is configured.
    ///
    /// A missing password is passed through as empty.
    #[must_use]
    pub fn contract(&self) -> Option<Contract> {
        self.contract_code.as_ref().map(|code| {
            Contract::new(code.clone(), self.contract_password.clone().unwrap_or_default())
        })
    }
}

impl fmt::Debug for CorreiosConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorreiosConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .field("contract_code", &self.contract_code)
            .field(
                "contract_password",
                &self.contract_password.as_ref().map(|_| "***"),
            )
            .finish()
    }
}
