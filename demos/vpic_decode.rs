//! Live vPIC decode walkthrough. Requires network access.
//!
//! Run with: `cargo run --example vpic_decode --features decode`

use fahrgestell::core::Vin;
use fahrgestell::decode::{DecodeSession, VpicClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vin = Vin::from_number("WBA3A5G59DNP26082")?;
    println!("decoding {vin} via NHTSA vPIC…\n");

    let mut session = DecodeSession::new(&vin, VpicClient::new()?);

    // The first call fetches; the rest replay the memoized result.
    println!("  make:         {}", session.make().await?);
    println!("  model:        {}", session.model().await?);
    println!("  vehicle type: {}", session.vehicle_type().await?);
    println!("  body class:   {}", session.body_class().await?);

    match session.is_valid_upstream().await {
        Ok(vin_number) => println!("\n  vPIC reports {vin_number} as valid"),
        Err(e) => println!("\n  vPIC rejects this VIN: {e}"),
    }

    println!("\n=== Full decode ===\n");
    for (name, value) in session.as_info_map().await? {
        println!("  {name}: {value}");
    }

    session.close();
    Ok(())
}
