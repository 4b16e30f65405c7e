use fahrgestell::core::{RegionCode, Vin, VinError};

// ---------------------------------------------------------------------------
// Construction & Normalization
// ---------------------------------------------------------------------------

#[test]
fn empty_input_rejected() {
    assert_eq!(Vin::from_number(""), Err(VinError::EmptyInput));
}

#[test]
fn whitespace_only_rejected() {
    assert_eq!(Vin::from_number("   \t"), Err(VinError::EmptyInput));
}

#[test]
fn hyphens_stripped_everywhere() {
    let vin = Vin::from_number("WBA-3A5G59-DNP-26082").unwrap();
    assert_eq!(vin.normalized(), "WBA3A5G59DNP26082");
}

#[test]
fn lowercase_uppercased() {
    let vin = Vin::from_number("wba3a5g59dnp26082").unwrap();
    assert_eq!(vin.normalized(), "WBA3A5G59DNP26082");
}

#[test]
fn raw_input_preserved() {
    let vin = Vin::from_number("wba-3a5g59dnp26082").unwrap();
    assert_eq!(vin.raw(), "wba-3a5g59dnp26082");
}

#[test]
fn surrounding_whitespace_trimmed() {
    let vin = Vin::from_number("  WBA3A5G59DNP26082  ").unwrap();
    assert_eq!(vin.normalized(), "WBA3A5G59DNP26082");
}

// ---------------------------------------------------------------------------
// Structural Fields
// ---------------------------------------------------------------------------

#[test]
fn field_split_reference_vin() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.wmi().unwrap(), "WBA");
    assert_eq!(vin.vds().unwrap(), "3A5G59");
    assert_eq!(vin.vis().unwrap(), "DNP26082");
}

#[test]
fn assembly_plant_and_serial_number() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.assembly_plant().unwrap(), 'N');
    assert_eq!(vin.serial_number().unwrap(), "26082");
}

#[test]
fn wmi_too_short() {
    let vin = Vin::from_number("WB").unwrap();
    assert_eq!(
        vin.wmi(),
        Err(VinError::TooShort {
            field: "WMI",
            needed: 3,
            got: 2
        })
    );
}

#[test]
fn vds_too_short() {
    let vin = Vin::from_number("WBA3A5").unwrap();
    assert!(matches!(vin.vds(), Err(VinError::TooShort { needed: 9, .. })));
}

#[test]
fn vis_too_short() {
    let vin = Vin::from_number("WBA3A5G59DNP2608").unwrap();
    assert!(matches!(vin.vis(), Err(VinError::TooShort { needed: 17, .. })));
}

#[test]
fn serial_number_too_short_not_a_panic() {
    let vin = Vin::from_number("WBA3A5G59DNP26").unwrap();
    assert!(matches!(
        vin.serial_number(),
        Err(VinError::TooShort { needed: 17, .. })
    ));
}

// ---------------------------------------------------------------------------
// Region Classification
// ---------------------------------------------------------------------------

#[test]
fn region_round_trip_w_is_europe() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.region_code().unwrap(), RegionCode::Eu);
    assert_eq!(vin.region_code().unwrap().as_str(), "EU");
    assert_eq!(vin.region_name().unwrap(), "Europe");
}

#[test]
fn region_north_america() {
    let vin = Vin::from_number("1HGCM82633A004352").unwrap();
    assert_eq!(vin.region_code().unwrap(), RegionCode::Na);
    assert_eq!(vin.region_name().unwrap(), "North America");
}

#[test]
fn region_unissued_first_char() {
    for raw in ["OBA3A5G59DNP26082", "QBA3A5G59DNP26082", "0BA3A5G59DNP26082"] {
        let vin = Vin::from_number(raw).unwrap();
        assert!(matches!(
            vin.region_code(),
            Err(VinError::InvalidRegionChar(_))
        ));
        assert!(!vin.is_valid());
    }
}

// ---------------------------------------------------------------------------
// Manufacturer & Country
// ---------------------------------------------------------------------------

#[test]
fn manufacturer_round_trip_wba_is_bmw() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.manufacturer().unwrap(), "BMW");
}

#[test]
fn country_round_trip_wba_is_germany() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.country().unwrap(), "Germany");
}

#[test]
fn manufacturer_two_char_fallback() {
    // 1GY (Cadillac) is not a full-WMI entry; falls back to the 1G block
    let vin = Vin::from_number("1GYS4HKJ5MR116493").unwrap();
    assert_eq!(vin.manufacturer().unwrap(), "General Motors");
}

#[test]
fn unknown_manufacturer_reports_wmi() {
    let vin = Vin::from_number("XXX3A5G59DNP26082").unwrap();
    assert_eq!(
        vin.manufacturer(),
        Err(VinError::UnknownManufacturer("XXX".into()))
    );
}

#[test]
fn unknown_country_reports_wmi() {
    let vin = Vin::from_number("XXX3A5G59DNP26082").unwrap();
    assert_eq!(
        vin.country(),
        Err(VinError::InvalidWmiForCountry("XXX".into()))
    );
}

#[test]
fn manufacturer_on_short_vin_is_too_short() {
    let vin = Vin::from_number("W").unwrap();
    assert!(matches!(vin.manufacturer(), Err(VinError::TooShort { .. })));
}

// ---------------------------------------------------------------------------
// Model Year
// ---------------------------------------------------------------------------

#[test]
fn year_character_reference_vin() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    assert_eq!(vin.year_character().unwrap(), 'D');
    assert_eq!(vin.year().unwrap(), 2013);
}

#[test]
fn year_digit_characters() {
    let vin = Vin::from_number("1HGCM82633A004352").unwrap();
    assert_eq!(vin.year_character().unwrap(), '3');
    assert_eq!(vin.year().unwrap(), 2003);
}

#[test]
fn invalid_year_character() {
    // 'Z' is excluded from the model year alphabet
    let vin = Vin::from_number("1HGCM8263ZA004352").unwrap();
    assert_eq!(vin.year(), Err(VinError::InvalidYearChar('Z')));
}

#[test]
fn year_on_short_vin_is_too_short() {
    let vin = Vin::from_number("1HGCM8263").unwrap();
    assert!(matches!(
        vin.year_character(),
        Err(VinError::TooShort { needed: 10, .. })
    ));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn vin_serde_round_trip() {
    let vin = Vin::from_number("WBA3A5G59DNP26082").unwrap();
    let json = serde_json::to_string(&vin).unwrap();
    assert!(json.contains("WBA3A5G59DNP26082"));
    let back: Vin = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vin);
}

#[test]
fn region_code_serializes_as_two_letter_code() {
    let json = serde_json::to_string(&RegionCode::Eu).unwrap();
    assert_eq!(json, "\"EU\"");
}

// ---------------------------------------------------------------------------
// Error Display
// ---------------------------------------------------------------------------

#[test]
fn too_short_display_carries_context() {
    let err = Vin::from_number("WB").unwrap().wmi().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("WMI"));
    assert!(msg.contains('3'));
    assert!(msg.contains('2'));
}

#[test]
fn unknown_manufacturer_display() {
    let err = VinError::UnknownManufacturer("XXX".into());
    assert!(err.to_string().contains("XXX"));
}

#[test]
fn invalid_region_char_display() {
    let err = VinError::InvalidRegionChar('0');
    assert!(err.to_string().contains('0'));
}
