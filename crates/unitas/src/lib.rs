//! # Unitas
//!
//! Physical quantities with run-time dimensional analysis.
//!
//! A quantity pairs a magnitude with a unit parsed from text such as
//! `"kg*m^-1*s^-2"`. Arithmetic that would mix incompatible dimensions
//! fails, while compatible units combine, cancel or rescale.
//!
//! ## Features
//!
//! - **Unit Expressions**: SI base units, all decimal prefixes, rational exponents
//! - **Exact Scales**: prefix scales are stored as exact decades of ten
//! - **Generic Magnitudes**: `f64`, `f32` or exact `Rational`
//! - **Checked Operators**: `+ - * /` return `Result`
//!
//! ## Quick Start
//!
//! ```rust
//! use unitas::prelude::*;
//!
//! let volume_flow = Quantity::new(10.0, "m^3/s")?;
//! let density = Quantity::new(12.0, "kg/m^3")?;
//! let mass_flow = (volume_flow * density)?;
//! assert_eq!(mass_flow.to_string(), "120 kg/s");
//! # Ok::<(), QuantityError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use unitas_field as field;
pub use unitas_numbers as numbers;
pub use unitas_quantity as quantity;
pub use unitas_units as units;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use unitas_field::OrderedField;
    pub use unitas_numbers::{Integer, Rational};
    pub use unitas_quantity::{Quantity, QuantityError};
    pub use unitas_units::{BaseUnit, DimensionVector, Factor, ParseError, Prefix, Scale, Unit, UnitFormat};
}
