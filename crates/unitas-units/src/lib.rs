//! # unitas-units
//!
//! The unit algebra engine: parsing unit expressions and combining their
//! dimensions.
//!
//! This crate provides:
//! - The SI prefix table and the seven base units
//! - A parser for expressions such as `kg*m^-1*s^-2` or `kg/(m*s^2)`
//! - `DimensionVector`, the canonical exponent map plus decimal scale
//! - `Unit`, a dimension vector paired with its display factors
//!
//! ## Data Flow
//!
//! ```text
//! "kg/m^3" ──lexer──▶ tokens ──parser──▶ [(k, g, 1), (·, m, -3)]
//!                                              │
//!                                              ▼
//!                          Unit { factors, DimensionVector }
//! ```
//!
//! Rendering reads only the factor list; equality and compatibility read
//! only the dimension vector.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod base;
pub mod dimension;
pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod prefix;
pub mod scale;
pub mod unit;

#[cfg(test)]
mod proptests;

pub use base::{resolve_base, BaseUnit};
pub use dimension::DimensionVector;
pub use error::{ParseError, ParseErrorKind, UnknownSymbolError};
pub use format::UnitFormat;
pub use parser::parse_factors;
pub use prefix::{resolve_prefix, split_symbol, Prefix};
pub use scale::Scale;
pub use unit::{Factor, Unit};
pub use unitas_numbers::Rational;
