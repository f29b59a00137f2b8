//! Fixtures

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{cart::Cart, request::DealRequest, vendors::Vendor};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// File extension is neither YAML nor JSON
    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),
}

/// Deal fixture file contents
#[derive(Debug, Deserialize)]
struct DealFixture {
    /// Currency code used to display amounts
    #[serde(default)]
    currency: Option<String>,

    #[serde(flatten)]
    request: DealRequest,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    request: DealRequest,
    currency: &'static Currency,
}

impl Fixture {
    /// Base path fixture sets are looked up under by [`Fixture::from_set`]
    pub const BASE_PATH: &'static str = "./fixtures";

    /// Load the named fixture set from `./fixtures/deals/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an unknown currency.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(Self::BASE_PATH, name)
    }

    /// Load the named fixture set from `<base_path>/deals/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an unknown currency.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let path = base_path.into().join("deals").join(format!("{name}.yml"));

        Self::from_path(path)
    }

    /// Load a fixture or request file, YAML or JSON by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, has an unsupported
    /// extension, or names an unknown currency.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let fixture: DealFixture = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => serde_norway::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            _ => return Err(FixtureError::UnsupportedFormat(path.display().to_string())),
        };

        let currency = fixture.currency.as_deref().map_or(Ok(USD), parse_currency)?;

        Ok(Fixture {
            request: fixture.request,
            currency,
        })
    }

    /// The cart and vendors
    pub fn request(&self) -> &DealRequest {
        &self.request
    }

    /// The cart
    pub fn cart(&self) -> &Cart {
        &self.request.cart
    }

    /// The vendors
    pub fn vendors(&self) -> &[Vendor] {
        &self.request.vendors
    }

    /// Currency for displaying amounts
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Parse a currency code (e.g. "GBP")
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        _ => Err(FixtureError::UnknownCurrency(code.to_string())),
    }
}
