//! # unitas-field
//!
//! The numeric interface a quantity's magnitude must satisfy.
//!
//! The unit engine never looks inside a magnitude; it only needs the
//! operations of an ordered field plus powers. This crate provides:
//! - The `OrderedField` trait
//! - Implementations for `f64` and `f32`
//! - An exact implementation for `unitas_numbers::Rational`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Zero + One + Add + Sub + Mul + Div + Neg + PartialOrd
//!  └── OrderedField
//!       ├── f64, f32          (inexact, all real powers)
//!       └── Rational          (exact, rational powers when exact)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod float;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use traits::OrderedField;
pub use unitas_numbers::Rational;
