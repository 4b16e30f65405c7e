#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(vin) = fahrgestell::core::Vin::from_number(s) {
            let _ = vin.wmi();
            let _ = vin.vds();
            let _ = vin.vis();
            let _ = vin.region_code();
            let _ = vin.region_name();
            let _ = vin.country();
            let _ = vin.manufacturer();
            let _ = vin.year_character();
            let _ = vin.year();
            let _ = vin.checksum();
            let _ = vin.calculated_checksum();
            let _ = vin.assembly_plant();
            let _ = vin.serial_number();
        }
    }
});
