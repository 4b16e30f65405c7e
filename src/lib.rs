//! # fahrgestell
//!
//! VIN (Fahrgestellnummer) decoding and validation: normalize a raw
//! 17-character Vehicle Identification Number, extract its structural
//! fields, verify the ISO 3779 check digit, resolve region, country and
//! manufacturer from WMI tables, and enrich via the NHTSA vPIC decode
//! service with per-session memoization.
//!
//! ## Quick Start
//!
//! ```rust
//! use fahrgestell::core::Vin;
//!
//! let vin = Vin::from_number("1HGCM82633A004352").unwrap();
//!
//! assert_eq!(vin.wmi().unwrap(), "1HG");
//! assert_eq!(vin.manufacturer().unwrap(), "Honda");
//! assert_eq!(vin.country().unwrap(), "United States");
//! assert_eq!(vin.region_name().unwrap(), "North America");
//! assert_eq!(vin.year().unwrap(), 2003);
//! assert_eq!(vin.checksum().unwrap(), '3');
//! assert!(vin.is_valid());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | VIN type, check digit, WMI/region/year tables |
//! | `decode` | NHTSA vPIC decode client & memoized sessions |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "decode")]
pub mod decode;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
