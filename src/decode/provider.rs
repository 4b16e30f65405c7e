//! Decode provider abstraction and the NHTSA vPIC REST client.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One decoded field: the provider's (identifier, name, value) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedField {
    /// Provider-assigned variable identifier (stable across responses).
    pub id: u32,
    /// Human-readable variable name, e.g. "Body Class".
    pub name: String,
    /// Decoded value; `None` or blank when the provider has no data.
    pub value: Option<String>,
}

/// Structured result of one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// All field triples, in provider order.
    pub fields: Vec<DecodedField>,
}

impl DecodeResponse {
    /// The value of a field by identifier, if present and non-blank.
    pub fn value_of(&self, id: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .and_then(|f| f.value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// vPIC variable identifiers consumed by the session projections.
pub mod fields {
    /// Vehicle make, e.g. "BMW".
    pub const MAKE: u32 = 26;
    /// Vehicle model, e.g. "328i".
    pub const MODEL: u32 = 28;
    /// Vehicle type, e.g. "PASSENGER CAR".
    pub const VEHICLE_TYPE: u32 = 39;
    /// Body class, e.g. "Sedan/Saloon".
    pub const BODY_CLASS: u32 = 5;
    /// Decode error report; blank or [`super::CLEAN_DECODE_MESSAGE`]
    /// means the VIN decoded clean.
    pub const ERROR_TEXT: u32 = 191;
}

/// The error-report value vPIC returns for a clean decode.
pub const CLEAN_DECODE_MESSAGE: &str =
    "0 - VIN decoded clean. Check Digit (9th position) is correct";

/// Error from the decode provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderError {
    /// Network or HTTP error.
    Network(String),
    /// The provider returned an error response.
    Api(String),
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "decode network error: {e}"),
            Self::Api(e) => write!(f, "decode API error: {e}"),
            Self::Parse(e) => write!(f, "decode parse error: {e}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A source of VIN decode data.
///
/// The one seam between [`crate::decode::DecodeSession`] and the
/// network: production code uses [`VpicClient`], tests substitute a
/// stub to observe call counts.
pub trait DecodeProvider {
    /// Decode a VIN into the provider's field triples.
    fn decode(
        &self,
        vin: &str,
    ) -> impl Future<Output = Result<DecodeResponse, ProviderError>> + Send;
}

/// Public NHTSA vPIC endpoint.
pub const VPIC_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// REST client for the NHTSA vPIC `DecodeVin` endpoint.
///
/// The vPIC API is a free public service with no authentication.
#[derive(Debug, Clone)]
pub struct VpicClient {
    client: reqwest::Client,
    base_url: String,
}

impl VpicClient {
    /// Client against the public vPIC endpoint with a 30 second timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_config(VPIC_BASE_URL, Duration::from_secs(30))
    }

    /// Client with a custom base URL and timeout.
    ///
    /// The base URL is everything before `/DecodeVin/…`; point it at a
    /// local stub server in tests or at a proxy in production.
    pub fn with_config(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

/// vPIC API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VpicResponse {
    results: Option<Vec<VpicRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VpicRow {
    variable_id: Option<u32>,
    variable: Option<String>,
    value: Option<String>,
}

impl VpicResponse {
    fn into_response(self) -> DecodeResponse {
        let fields = self
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|row| {
                Some(DecodedField {
                    id: row.variable_id?,
                    name: row.variable?,
                    value: row.value,
                })
            })
            .collect();
        DecodeResponse { fields }
    }
}

impl DecodeProvider for VpicClient {
    async fn decode(&self, vin: &str) -> Result<DecodeResponse, ProviderError> {
        let url = format!(
            "{}/DecodeVin/{}?format=json",
            self.base_url,
            urlencoding::encode(vin)
        );
        log::debug!("decoding VIN {vin} via vPIC");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Api(format!("HTTP {status}: {body}")));
        }

        let api_resp: VpicResponse = serde_json::from_str(&body)
            .map_err(|e: serde_json::Error| ProviderError::Parse(e.to_string()))?;

        Ok(api_resp.into_response())
    }
}
