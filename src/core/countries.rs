//! WMI → country of manufacture lookup.
//!
//! ISO 3780 assigns the first two WMI characters to a country.
//! Illustrative subset covering the common assignments; the lookup uses
//! the same 3-then-2 fallback policy as the manufacturer table.

use super::error::VinError;

/// Resolve a WMI to its country of manufacture.
///
/// Fails with [`VinError::InvalidWmiForCountry`] when neither the full
/// WMI nor its 2-character prefix is assigned in the table.
pub fn country(wmi: &str) -> Result<&'static str, VinError> {
    if let Some(name) = lookup(wmi) {
        return Ok(name);
    }
    if let Some(name) = wmi.get(..2).and_then(lookup) {
        return Ok(name);
    }
    Err(VinError::InvalidWmiForCountry(wmi.into()))
}

fn lookup(key: &str) -> Option<&'static str> {
    COUNTRIES
        .binary_search_by_key(&key, |&(prefix, _)| prefix)
        .map(|idx| COUNTRIES[idx].1)
        .ok()
}

/// WMI prefix → country. Sorted for binary search.
static COUNTRIES: &[(&str, &str)] = &[
    ("1C", "United States"),
    ("1F", "United States"),
    ("1G", "United States"),
    ("1H", "United States"),
    ("1J", "United States"),
    ("1L", "United States"),
    ("1M", "United States"),
    ("1N", "United States"),
    ("1V", "United States"),
    ("2C", "Canada"),
    ("2F", "Canada"),
    ("2G", "Canada"),
    ("2H", "Canada"),
    ("2T", "Canada"),
    ("3C", "Mexico"),
    ("3F", "Mexico"),
    ("3G", "Mexico"),
    ("3H", "Mexico"),
    ("3N", "Mexico"),
    ("3V", "Mexico"),
    ("4F", "United States"),
    ("4J", "United States"),
    ("4M", "United States"),
    ("4S", "United States"),
    ("4T", "United States"),
    ("4U", "United States"),
    ("5F", "United States"),
    ("5L", "United States"),
    ("5N", "United States"),
    ("5T", "United States"),
    ("5Y", "United States"),
    ("6F", "Australia"),
    ("6G", "Australia"),
    ("6H", "Australia"),
    ("6M", "Australia"),
    ("6T", "Australia"),
    ("6U", "Australia"),
    ("8A", "Argentina"),
    ("8B", "Argentina"),
    ("8C", "Argentina"),
    ("93", "Brazil"),
    ("94", "Brazil"),
    ("9B", "Brazil"),
    ("JA", "Japan"),
    ("JF", "Japan"),
    ("JH", "Japan"),
    ("JM", "Japan"),
    ("JN", "Japan"),
    ("JS", "Japan"),
    ("JT", "Japan"),
    ("KL", "South Korea"),
    ("KM", "South Korea"),
    ("KN", "South Korea"),
    ("SA", "United Kingdom"),
    ("SB", "United Kingdom"),
    ("SC", "United Kingdom"),
    ("SD", "United Kingdom"),
    ("SF", "United Kingdom"),
    ("SH", "United Kingdom"),
    ("SJ", "United Kingdom"),
    ("SK", "United Kingdom"),
    ("SL", "United Kingdom"),
    ("SM", "United Kingdom"),
    ("SU", "Poland"),
    ("VA", "Austria"),
    ("VF", "France"),
    ("VG", "France"),
    ("VJ", "France"),
    ("VL", "France"),
    ("VN", "France"),
    ("VR", "France"),
    ("VS", "Spain"),
    ("VV", "Spain"),
    ("W0", "Germany"),
    ("WA", "Germany"),
    ("WB", "Germany"),
    ("WD", "Germany"),
    ("WF", "Germany"),
    ("WM", "Germany"),
    ("WP", "Germany"),
    ("WV", "Germany"),
    ("YS", "Sweden"),
    ("YT", "Sweden"),
    ("YU", "Sweden"),
    ("YV", "Sweden"),
    ("ZA", "Italy"),
    ("ZB", "Italy"),
    ("ZC", "Italy"),
    ("ZD", "Italy"),
    ("ZF", "Italy"),
];
