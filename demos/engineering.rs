//! Engineering calculations with checked units
//!
//! Run with: cargo run --example engineering
//! Set RUST_LOG=unitas_quantity=debug to see unit mismatches logged.

use tracing_subscriber::EnvFilter;
use unitas::prelude::*;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("UNITAS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), QuantityError> {
    init_tracing();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 1: Pipe Flow");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let inlet = Quantity::new(5.0, "m^3/s")?;
    let bypass = Quantity::new(10.0, "m^3*s^-1")?;
    let total = (&inlet + &bypass)?;
    println!("  {inlet} + {bypass} = {total}");

    let density = Quantity::new(12.0, "kg/m^3")?;
    let mass_flow = (&total * &density)?;
    println!("  {total} * {density} = {mass_flow}");

    match &total + &density {
        Ok(nonsense) => println!("  unexpectedly added: {nonsense}"),
        Err(err) => println!("  {total} + {density} fails: {err}\n"),
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 2: Mixed Prefixes");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let run = Quantity::new(1.0, "km")?;
    let sprint = Quantity::new(500.0, "m")?;
    println!("  {run} + {sprint} = {}", (&run + &sprint)?);
    println!("  {run} * {} = {}", Quantity::new(1.0, "m")?, (run.clone() * Quantity::new(1.0, "m")?)?);
    println!("  {run} in metres: {}", run.value_in("m")?);
    println!("  3.6 km/ms in base units: {}\n", Quantity::new(3.6, "km/ms")?.to_base_units()?);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 3: Powers and Exact Magnitudes");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let plot = Quantity::new(4.0, "km^2")?;
    println!("  side of a {plot} square plot: {}", plot.sqrt()?);

    let third = Quantity::new(Rational::from_i64(1, 3), "km")?;
    let seventh = Quantity::new(Rational::from_i64(1, 7), "m")?;
    println!("  {third} + {seventh} = {} (exact)", (&third + &seventh)?);

    let pressure = Quantity::new(101.325, "kg*m^-1*s^-2")?;
    println!("  standard pressure: {pressure} = {pressure:#}");

    Ok(())
}
