//! WMI → manufacturer lookup.
//!
//! Illustrative subset of the SAE WMI register. Entries are keyed by the
//! full 3-character WMI, with 2-character fallback entries where a whole
//! prefix block belongs to one maker.

use super::error::VinError;

/// Resolve a WMI to a manufacturer name.
///
/// The full 3-character WMI is tried first, then its first two
/// characters. Fails with [`VinError::UnknownManufacturer`] when neither
/// form is in the table.
pub fn manufacturer(wmi: &str) -> Result<&'static str, VinError> {
    if let Some(name) = lookup(wmi) {
        return Ok(name);
    }
    if let Some(name) = wmi.get(..2).and_then(lookup) {
        return Ok(name);
    }
    Err(VinError::UnknownManufacturer(wmi.into()))
}

fn lookup(key: &str) -> Option<&'static str> {
    MANUFACTURERS
        .binary_search_by_key(&key, |&(wmi, _)| wmi)
        .map(|idx| MANUFACTURERS[idx].1)
        .ok()
}

/// WMI (or 2-character prefix) → manufacturer. Sorted for binary search.
static MANUFACTURERS: &[(&str, &str)] = &[
    ("1C4", "Chrysler"),
    ("1FA", "Ford"),
    ("1FT", "Ford"),
    ("1G", "General Motors"),
    ("1G1", "Chevrolet"),
    ("1GC", "Chevrolet"),
    ("1HG", "Honda"),
    ("1J4", "Jeep"),
    ("1N4", "Nissan"),
    ("1VW", "Volkswagen"),
    ("2G", "General Motors"),
    ("2HG", "Honda"),
    ("2T1", "Toyota"),
    ("3FA", "Ford"),
    ("3N1", "Nissan"),
    ("3VW", "Volkswagen"),
    ("4S3", "Subaru"),
    ("4T1", "Toyota"),
    ("5YJ", "Tesla"),
    ("6F", "Ford Australia"),
    ("6G", "Holden"),
    ("9BW", "Volkswagen do Brasil"),
    ("JF1", "Subaru"),
    ("JHM", "Honda"),
    ("JN1", "Nissan"),
    ("JTD", "Toyota"),
    ("KM", "Hyundai"),
    ("KMH", "Hyundai"),
    ("KNA", "Kia"),
    ("KND", "Kia"),
    ("SAJ", "Jaguar"),
    ("SAL", "Land Rover"),
    ("SCC", "Lotus"),
    ("SCF", "Aston Martin"),
    ("VF1", "Renault"),
    ("VF3", "Peugeot"),
    ("VF7", "Citroën"),
    ("W0L", "Opel"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WDB", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WME", "Smart"),
    ("WMW", "Mini"),
    ("WP0", "Porsche"),
    ("WVW", "Volkswagen"),
    ("YV1", "Volvo"),
    ("ZAR", "Alfa Romeo"),
    ("ZFA", "Fiat"),
    ("ZFF", "Ferrari"),
];
