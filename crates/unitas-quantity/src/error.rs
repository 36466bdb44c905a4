//! Errors raised by quantity arithmetic.

use thiserror::Error;
use unitas_units::{ParseError, Unit};

/// Errors that can occur when building or combining quantities.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The unit string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The operands measure different dimensions.
    #[error("incompatible units: '{left}' and '{right}'")]
    UnitMismatch {
        /// Unit of the left operand.
        left: Unit,
        /// Unit of the right operand.
        right: Unit,
    },

    /// The divisor's magnitude is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result is undefined for the magnitude type.
    #[error("domain error: {0}")]
    Domain(String),
}

impl QuantityError {
    pub(crate) fn mismatch(left: &Unit, right: &Unit) -> Self {
        tracing::debug!(%left, %right, "unit mismatch");
        Self::UnitMismatch {
            left: left.clone(),
            right: right.clone(),
        }
    }
}
