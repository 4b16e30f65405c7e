use std::fmt;

use serde::{Deserialize, Serialize};

use super::checksum::{self, CHECK_DIGIT_POSITION};
use super::countries;
use super::error::VinError;
use super::manufacturers;
use super::regions::{self, RegionCode};
use super::years;

/// A Vehicle Identification Number, normalized once at construction.
///
/// Normalization uppercases the input and strips every `-` character.
/// All field accessors derive from the normalized string and return a
/// typed [`VinError`] instead of panicking when the VIN is malformed or
/// shorter than the field requires.
///
/// # Example
///
/// ```rust
/// use fahrgestell::core::Vin;
///
/// let vin = Vin::from_number("WBA3A5G59DNP26082")?;
/// assert_eq!(vin.wmi()?, "WBA");
/// assert_eq!(vin.manufacturer()?, "BMW");
/// assert_eq!(vin.year()?, 2013);
/// assert!(vin.is_valid());
/// # Ok::<(), fahrgestell::core::VinError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vin {
    raw: String,
    normalized: String,
}

impl Vin {
    /// Construct a VIN from raw text.
    ///
    /// Fails with [`VinError::EmptyInput`] when the text is blank.
    /// No length or charset validation happens here — a too-short VIN
    /// constructs fine and fails later, field by field.
    pub fn from_number(text: impl Into<String>) -> Result<Self, VinError> {
        let raw = text.into();
        if raw.trim().is_empty() {
            return Err(VinError::EmptyInput);
        }
        let normalized = raw
            .trim()
            .chars()
            .filter(|&c| c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Ok(Self { raw, normalized })
    }

    /// The original input, unmodified.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized form: uppercased, hyphens removed.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// World Manufacturer Identifier (characters 1–3).
    pub fn wmi(&self) -> Result<String, VinError> {
        self.chars_at("WMI", 0, 3)
    }

    /// Vehicle Descriptor Section (characters 4–9).
    pub fn vds(&self) -> Result<String, VinError> {
        self.chars_at("VDS", 3, 9)
    }

    /// Vehicle Identification Section (characters 10–17).
    pub fn vis(&self) -> Result<String, VinError> {
        self.chars_at("VIS", 9, 17)
    }

    /// Manufacturing region, classified from the first character.
    pub fn region_code(&self) -> Result<RegionCode, VinError> {
        let first = self
            .normalized
            .chars()
            .next()
            .ok_or(VinError::too_short("region", 1, 0))?;
        RegionCode::from_char(first)
    }

    /// Human-readable region name, e.g. `"Europe"`.
    pub fn region_name(&self) -> Result<&'static str, VinError> {
        regions::region_name(self.region_code()?)
    }

    /// Country of manufacture, resolved from the WMI.
    pub fn country(&self) -> Result<&'static str, VinError> {
        countries::country(&self.wmi()?)
    }

    /// Manufacturer name, resolved from the WMI with a 2-character
    /// prefix fallback.
    pub fn manufacturer(&self) -> Result<&'static str, VinError> {
        manufacturers::manufacturer(&self.wmi()?)
    }

    /// The model year character (position 10).
    pub fn year_character(&self) -> Result<char, VinError> {
        self.char_at("model year", 9)
    }

    /// The model year, resolved from the year character.
    pub fn year(&self) -> Result<i32, VinError> {
        years::model_year(self.year_character()?)
    }

    /// The stored check digit (position 9).
    ///
    /// European VINs carry no check digit; for them this fails with
    /// [`VinError::NoChecksumForRegion`].
    pub fn checksum(&self) -> Result<char, VinError> {
        let region = self.region_code()?;
        if region == RegionCode::Eu {
            return Err(VinError::NoChecksumForRegion(region));
        }
        self.char_at("check digit", CHECK_DIGIT_POSITION)
    }

    /// The check digit this VIN *should* carry, per the ISO 3779
    /// weighted transliteration algorithm.
    pub fn calculated_checksum(&self) -> Result<char, VinError> {
        checksum::calculate_check_digit(&self.normalized)
    }

    /// Assembly plant code (position 11).
    pub fn assembly_plant(&self) -> Result<char, VinError> {
        self.char_at("assembly plant", 10)
    }

    /// Production serial number (positions 13–17).
    pub fn serial_number(&self) -> Result<String, VinError> {
        self.chars_at("serial number", 12, 17)
    }

    /// Whole-VIN validity check. Never fails — any error in a sub-check
    /// collapses to `false`.
    ///
    /// A VIN is valid when it is exactly 17 ASCII alphanumerics, its
    /// first character classifies to a region, and the check digit
    /// matches — except for European VINs and United Kingdom WMIs,
    /// which are checksum-exempt.
    pub fn is_valid(&self) -> bool {
        if self.normalized.len() != 17
            || !self.normalized.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return false;
        }
        let Ok(region) = self.region_code() else {
            return false;
        };
        if region == RegionCode::Eu {
            return true;
        }
        if self.country().is_ok_and(|c| c == "United Kingdom") {
            return true;
        }
        match self.calculated_checksum() {
            Ok(calc) => self.normalized.as_bytes()[CHECK_DIGIT_POSITION] == calc as u8,
            Err(_) => false,
        }
    }

    fn char_at(&self, field: &'static str, index: usize) -> Result<char, VinError> {
        self.normalized
            .chars()
            .nth(index)
            .ok_or_else(|| VinError::too_short(field, index + 1, self.normalized.chars().count()))
    }

    fn chars_at(&self, field: &'static str, start: usize, end: usize) -> Result<String, VinError> {
        let len = self.normalized.chars().count();
        if len < end {
            return Err(VinError::too_short(field, end, len));
        }
        Ok(self.normalized.chars().skip(start).take(end - start).collect())
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
