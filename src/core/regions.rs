//! Manufacturing region classification from the first VIN character.
//!
//! ISO 3780 assigns the first WMI character to a geographic region.
//! `I`, `O` and `Q` are never issued, and `0` is unassigned — those
//! characters classify to no region at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::VinError;

/// Two-letter manufacturing region code derived from the first VIN character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionCode {
    /// Africa (`A`–`H`).
    Af,
    /// Asia (`J`–`R`, excluding the unissued `O` and `Q`).
    As,
    /// Europe (`S`–`Z`).
    Eu,
    /// North America (`1`–`5`).
    Na,
    /// Oceania (`6`–`7`).
    Oc,
    /// South America (`8`–`9`).
    Sa,
}

impl RegionCode {
    /// The two-letter code, e.g. `"EU"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Af => "AF",
            Self::As => "AS",
            Self::Eu => "EU",
            Self::Na => "NA",
            Self::Oc => "OC",
            Self::Sa => "SA",
        }
    }

    /// Classify a first VIN character (case-insensitive).
    ///
    /// Characters outside the six assigned ranges — including `I`, `O`,
    /// `Q` and `0` — fail with [`VinError::InvalidRegionChar`].
    pub fn from_char(c: char) -> Result<Self, VinError> {
        match c.to_ascii_uppercase() {
            'A'..='H' => Ok(Self::Af),
            'J'..='N' | 'P' | 'R' => Ok(Self::As),
            'S'..='Z' => Ok(Self::Eu),
            '1'..='5' => Ok(Self::Na),
            '6' | '7' => Ok(Self::Oc),
            '8' | '9' => Ok(Self::Sa),
            other => Err(VinError::InvalidRegionChar(other)),
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the human-readable region name for a region code.
pub fn region_name(code: RegionCode) -> Result<&'static str, VinError> {
    REGION_NAMES
        .binary_search_by_key(&code.as_str(), |&(c, _)| c)
        .map(|idx| REGION_NAMES[idx].1)
        .map_err(|_| VinError::UnknownRegion(code.as_str().into()))
}

/// Region code → region name. Sorted for binary search.
static REGION_NAMES: &[(&str, &str)] = &[
    ("AF", "Africa"),
    ("AS", "Asia"),
    ("EU", "Europe"),
    ("NA", "North America"),
    ("OC", "Oceania"),
    ("SA", "South America"),
];
