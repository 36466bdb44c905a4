//! # unitas-quantity
//!
//! Physical quantities: a magnitude paired with a unit, with arithmetic
//! that enforces dimensional correctness at run time.
//!
//! This crate provides:
//! - `Quantity<T>` over any `OrderedField` magnitude
//! - The rules combining units under `+ - * /` and powers
//! - `QuantityError`, the failure taxonomy of those rules
//!
//! ## Operator Rules
//!
//! ```text
//! x + y, x - y   units must be compatible; y is rescaled into x's unit
//! x * y, x / y   any units; prefix scales may fold into the magnitude
//! x ^ p          every exponent is multiplied by p; prefixes are kept
//! x == y         false for incompatible units
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod error;
pub mod quantity;

#[cfg(test)]
mod proptests;

pub use error::QuantityError;
pub use quantity::{Quantity, MAX_EXPONENT_DENOMINATOR};
