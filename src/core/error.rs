use thiserror::Error;

use super::regions::RegionCode;

/// Errors that can occur while extracting or validating VIN fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VinError {
    /// The input was empty or whitespace-only.
    #[error("VIN input is empty")]
    EmptyInput,

    /// The normalized VIN is too short for the requested field.
    #[error("VIN too short for {field}: need {needed} characters, got {got}")]
    TooShort {
        /// Which field was requested (e.g. "WMI", "serial number").
        field: &'static str,
        /// Minimum normalized length the field requires.
        needed: usize,
        /// Actual normalized length.
        got: usize,
    },

    /// The first VIN character maps to no manufacturing region.
    #[error("character '{0}' does not map to any manufacturing region")]
    InvalidRegionChar(char),

    /// A region code with no entry in the region name table.
    #[error("no region name known for code '{0}'")]
    UnknownRegion(String),

    /// The WMI is absent from the manufacturer table, in both its
    /// 3-character and 2-character forms.
    #[error("no manufacturer known for WMI '{0}'")]
    UnknownManufacturer(String),

    /// The WMI is absent from the country table.
    #[error("no country mapping for WMI '{0}'")]
    InvalidWmiForCountry(String),

    /// The character at the model year position is not a valid year code.
    #[error("'{0}' is not a valid model year character")]
    InvalidYearChar(char),

    /// VINs from this region carry no check digit.
    #[error("{0} region VINs carry no check digit")]
    NoChecksumForRegion(RegionCode),
}

impl VinError {
    pub(crate) fn too_short(field: &'static str, needed: usize, got: usize) -> Self {
        Self::TooShort { field, needed, got }
    }
}
