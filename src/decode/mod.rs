//! Provider-backed VIN enrichment via the NHTSA vPIC API.
//!
//! A [`DecodeSession`] wraps one VIN and one [`DecodeProvider`],
//! performs a single provider call on the first enrichment request, and
//! serves every later request from the memoized result.
//!
//! # Example
//!
//! ```ignore
//! use fahrgestell::core::Vin;
//! use fahrgestell::decode::{DecodeSession, VpicClient};
//!
//! let vin = Vin::from_number("WBA3A5G59DNP26082")?;
//! let mut session = DecodeSession::new(&vin, VpicClient::new()?);
//!
//! // One network call, two answers
//! let make = session.make().await?;
//! let model = session.model().await?;
//!
//! session.close();
//! ```

mod provider;
mod session;

pub use provider::{
    CLEAN_DECODE_MESSAGE, DecodeProvider, DecodeResponse, DecodedField, ProviderError,
    VPIC_BASE_URL, VpicClient, fields,
};
pub use session::{DecodeError, DecodeSession};
