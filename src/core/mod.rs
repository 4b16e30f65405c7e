//! Core VIN type, check digit algorithm, and lookup tables.
//!
//! Everything in this module is pure and synchronous: a [`Vin`] is
//! normalized once at construction, and every accessor derives its
//! answer from the normalized string and the static tables.

mod checksum;
mod countries;
mod error;
mod manufacturers;
mod regions;
mod vin;
mod years;

pub use checksum::{CHECK_DIGIT_POSITION, calculate_check_digit};
pub use countries::country;
pub use error::VinError;
pub use manufacturers::manufacturer;
pub use regions::{RegionCode, region_name};
pub use vin::Vin;
pub use years::model_year;
