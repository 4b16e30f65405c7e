use fahrgestell::core::Vin;

fn main() {
    // Structural field extraction
    println!("=== VIN Field Extraction ===\n");

    let candidates = [
        "WBA3A5G59DNP26082",  // BMW 328i, built in Germany
        "1HGCM82633A004352",  // Honda Accord, built in the US
        "wba-3a5g59-dnp26082", // lowercase with hyphens — normalized away
        "WBA3A5G59",          // too short
    ];

    for raw in &candidates {
        println!("  {raw}");
        match Vin::from_number(*raw) {
            Ok(vin) => {
                match (vin.wmi(), vin.vds(), vin.vis()) {
                    (Ok(wmi), Ok(vds), Ok(vis)) => {
                        println!("    wmi={wmi} vds={vds} vis={vis}");
                    }
                    _ => println!("    (incomplete — fields unavailable)"),
                }
                if let (Ok(region), Ok(country)) = (vin.region_name(), vin.country()) {
                    println!("    region={region}, country={country}");
                }
                if let (Ok(manufacturer), Ok(year)) = (vin.manufacturer(), vin.year()) {
                    println!("    manufacturer={manufacturer}, model year={year}");
                }
            }
            Err(e) => println!("    REJECTED: {e}"),
        }
    }

    // Check digit verification
    println!("\n=== Check Digit ===\n");

    let checked = [
        "1HGCM82633A004352", // correct check digit
        "1HGCM82653A004352", // position 9 altered
        "WBA3A5G59DNP26082", // EU region — no check digit convention
    ];

    for raw in &checked {
        let vin = Vin::from_number(*raw).expect("non-empty");
        let calculated = vin
            .calculated_checksum()
            .map(|c| c.to_string())
            .unwrap_or_else(|e| format!("({e})"));
        let stored = vin
            .checksum()
            .map(|c| c.to_string())
            .unwrap_or_else(|e| format!("({e})"));
        println!(
            "  {raw}: stored={stored}, calculated={calculated}, valid={}",
            vin.is_valid()
        );
    }
}
