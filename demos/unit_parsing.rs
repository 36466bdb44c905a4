//! Parsing and rendering unit expressions
//!
//! Run with: cargo run --example unit_parsing -- "kg/(m*s^2)" "m^0.5"

use tracing_subscriber::EnvFilter;
use unitas::prelude::*;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("UNITAS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["m^3/s", "kg*m^-1*s^-2", "1/s", "(m/s)^2", "µmol", "km*m", "kg*furlong", "m^1/2"]
            .map(String::from)
            .to_vec();
    }

    for input in &inputs {
        match Unit::parse(input) {
            Ok(unit) => {
                println!("{input:>16}  →  {unit:<14} {unit:#}");
                println!("{:>16}     {:?}", "", unit.dimension());
                let names: Vec<String> = unit.factors().iter().map(Factor::name).collect();
                println!("{:>16}     {}", "", names.join(" "));
            }
            Err(err) => {
                tracing::warn!(input = %input, kind = %err.kind, "could not parse unit");
                println!("{input:>16}  ✗  {err}");
            }
        }
    }
}
