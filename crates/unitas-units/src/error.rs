//! Errors raised while resolving and parsing unit expressions.

use thiserror::Error;

/// A symbol that is neither a base unit nor a prefixed base unit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown unit symbol '{symbol}'")]
pub struct UnknownSymbolError {
    /// The unrecognized symbol.
    pub symbol: String,
}

impl UnknownSymbolError {
    pub(crate) fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }
}

/// What went wrong while parsing a unit expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An identifier that names no unit.
    #[error("unknown unit symbol")]
    UnknownSymbol,

    /// A character outside the expression alphabet.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// An operator with no factor after it.
    #[error("operator is missing a factor")]
    MissingFactor,

    /// A malformed exponent after `^`.
    #[error("invalid exponent")]
    InvalidExponent,

    /// A bracket without its partner.
    #[error("unbalanced bracket")]
    UnbalancedBracket,

    /// A number other than `1` used as a factor.
    #[error("numeric factors other than 1 are not units")]
    NumericFactor,
}

/// A malformed unit expression.
///
/// `fragment` is the offending substring and `position` its byte offset in
/// the original input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: '{fragment}' at position {position}")]
pub struct ParseError {
    /// The category of failure.
    pub kind: ParseErrorKind,
    /// The offending substring.
    pub fragment: String,
    /// Byte offset of `fragment` in the input.
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, fragment: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            fragment: fragment.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::new(ParseErrorKind::UnknownSymbol, "furlong", 3);
        assert_eq!(err.to_string(), "unknown unit symbol: 'furlong' at position 3");
        let err = ParseError::new(ParseErrorKind::MissingFactor, "/", 1);
        assert_eq!(err.to_string(), "operator is missing a factor: '/' at position 1");
        assert_eq!(
            UnknownSymbolError::new("xyz").to_string(),
            "unknown unit symbol 'xyz'"
        );
    }
}
