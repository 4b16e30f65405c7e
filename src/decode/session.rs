//! Per-VIN decode session with single-fetch memoization.

use std::collections::BTreeMap;

use thiserror::Error;

use super::provider::{
    CLEAN_DECODE_MESSAGE, DecodeProvider, DecodeResponse, ProviderError, fields,
};
use crate::core::Vin;

/// Errors that can occur during provider-backed enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The provider call failed (transport or parse). The failure is
    /// memoized; retrying requires a new session.
    #[error("decode provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),

    /// The provider answered, but the field is absent or blank.
    #[error("field {0} missing or blank in decode result")]
    FieldNotFound(u32),

    /// The session was closed before the first fetch.
    #[error("decode session is closed")]
    SessionClosed,

    /// The provider reports the VIN itself as invalid.
    #[error("provider reports VIN as invalid: {0}")]
    InvalidVinUpstream(String),
}

/// A decode session tied to one VIN.
///
/// The provider is called at most once for the lifetime of the session:
/// the first enrichment call fetches, every later call replays the
/// memoized outcome — success or failure. Methods take `&mut self`, so
/// two fetches can never be in flight at once.
///
/// The provider handle is a scoped resource: [`close`](Self::close)
/// releases it explicitly, dropping the session releases it implicitly.
pub struct DecodeSession<P: DecodeProvider> {
    vin_number: String,
    provider: Option<P>,
    cached: Option<Result<DecodeResponse, ProviderError>>,
    closed: bool,
}

impl<P: DecodeProvider> DecodeSession<P> {
    /// Create a session for a VIN. No network access happens until the
    /// first enrichment call.
    pub fn new(vin: &Vin, provider: P) -> Self {
        Self {
            vin_number: vin.normalized().to_string(),
            provider: Some(provider),
            cached: None,
            closed: false,
        }
    }

    /// The normalized VIN this session decodes.
    pub fn vin_number(&self) -> &str {
        &self.vin_number
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fetch the decode result, invoking the provider at most once.
    ///
    /// Success and failure are both memoized: a failed call is sticky
    /// and is never retried within this session.
    pub async fn fetch(&mut self) -> Result<DecodeResponse, DecodeError> {
        if let Some(cached) = &self.cached {
            return cached.clone().map_err(DecodeError::ProviderUnavailable);
        }
        let Some(provider) = &self.provider else {
            return Err(DecodeError::SessionClosed);
        };
        let result = provider.decode(&self.vin_number).await;
        if let Err(e) = &result {
            log::warn!("decode of {} failed: {e}", self.vin_number);
        }
        self.cached = Some(result.clone());
        result.map_err(DecodeError::ProviderUnavailable)
    }

    /// The value of one decoded field by provider identifier.
    ///
    /// Fails with [`DecodeError::FieldNotFound`] when the provider
    /// answered but the field is absent or blank.
    pub async fn get_field(&mut self, id: u32) -> Result<String, DecodeError> {
        let response = self.fetch().await?;
        response
            .value_of(id)
            .map(str::to_owned)
            .ok_or(DecodeError::FieldNotFound(id))
    }

    /// Vehicle make, e.g. "BMW".
    pub async fn make(&mut self) -> Result<String, DecodeError> {
        self.get_field(fields::MAKE).await
    }

    /// Vehicle model, e.g. "328i".
    pub async fn model(&mut self) -> Result<String, DecodeError> {
        self.get_field(fields::MODEL).await
    }

    /// Vehicle type, e.g. "PASSENGER CAR".
    pub async fn vehicle_type(&mut self) -> Result<String, DecodeError> {
        self.get_field(fields::VEHICLE_TYPE).await
    }

    /// Body class, e.g. "Sedan/Saloon".
    pub async fn body_class(&mut self) -> Result<String, DecodeError> {
        self.get_field(fields::BODY_CLASS).await
    }

    /// Every non-blank (name, value) pair from the decoded payload.
    pub async fn as_info_map(&mut self) -> Result<BTreeMap<String, String>, DecodeError> {
        let response = self.fetch().await?;
        Ok(response
            .fields
            .iter()
            .filter_map(|f| {
                let value = f.value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
                Some((f.name.clone(), value.to_string()))
            })
            .collect())
    }

    /// Interpret the provider's error report field.
    ///
    /// Absent, blank, or the canonical clean-decode message counts as
    /// valid and echoes back the VIN number; anything else surfaces as
    /// [`DecodeError::InvalidVinUpstream`].
    pub async fn is_valid_upstream(&mut self) -> Result<String, DecodeError> {
        let response = self.fetch().await?;
        match response.value_of(fields::ERROR_TEXT) {
            None => Ok(self.vin_number.clone()),
            Some(msg) if msg == CLEAN_DECODE_MESSAGE => Ok(self.vin_number.clone()),
            Some(msg) => Err(DecodeError::InvalidVinUpstream(msg.to_string())),
        }
    }

    /// Release the provider handle and clear the memo.
    ///
    /// Idempotent and infallible. Enrichment calls after `close` fail
    /// with [`DecodeError::SessionClosed`].
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        log::debug!("closing decode session for {}", self.vin_number);
        self.provider = None;
        self.cached = None;
        self.closed = true;
    }
}
