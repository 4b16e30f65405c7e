#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(vin) = fahrgestell::core::Vin::from_number(s) {
            // is_valid must never propagate an internal failure.
            let valid = vin.is_valid();
            if valid {
                // A valid VIN always has all structural fields.
                assert_eq!(vin.normalized().len(), 17);
                assert!(vin.wmi().is_ok());
                assert!(vin.vds().is_ok());
                assert!(vin.vis().is_ok());
                assert!(vin.serial_number().is_ok());
            }
        }
    }
});
