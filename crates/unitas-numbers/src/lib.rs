//! # unitas-numbers
//!
//! Exact arbitrary precision arithmetic for the unitas unit algebra.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! Rationals are the exponent type of every dimension and the decade
//! exponent of every prefix scale, so `m^(1/2)` and `km^3` are tracked
//! without rounding. They also serve as an exact magnitude type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};
