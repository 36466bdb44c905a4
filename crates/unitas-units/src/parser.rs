//! Recursive descent parser for unit expressions.
//!
//! ```text
//! expression := factor ( ( '*' | '/' | <juxtaposition> ) factor )*
//! factor     := primary ( '^' exponent )?
//! primary    := IDENT | '1' | '(' expression ')'
//! exponent   := sign? NUMBER | '(' sign? NUMBER ( '/' NUMBER )? ')'
//! ```
//!
//! `/` applies to the single factor that follows it, so `kg/m*s` is
//! `kg*m^-1*s`. Group with brackets to divide by a product: `kg/(m*s)`.

use num_traits::{One, Zero};
use unitas_numbers::Rational;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::prefix::split_symbol;
use crate::unit::{fold_factors, Factor};

/// Parses a unit expression into its folded factor list.
///
/// Factors sharing a prefix and base symbol are merged by summing their
/// exponents, zero exponents are dropped, and first-appearance order is
/// kept. The empty string and `"1"` parse to an empty list.
///
/// # Errors
///
/// Returns a `ParseError` naming the offending fragment and its byte offset.
pub fn parse_factors(input: &str) -> Result<Vec<Factor>, ParseError> {
    let result = tokenize(input).and_then(|tokens| Parser::new(input, tokens).parse());
    match &result {
        Ok(factors) => {
            tracing::trace!(input, factors = factors.len(), "parsed unit expression");
        }
        Err(error) => {
            tracing::debug!(input, %error, "rejected unit expression");
        }
    }
    result
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Vec<Factor>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(Vec::new());
        }

        let factors = self.expression()?;
        if let Some(token) = self.peek() {
            // Only a stray closing bracket can stop an expression early.
            return Err(error_at(ParseErrorKind::UnbalancedBracket, &token));
        }

        Ok(fold_factors(factors).into_vec())
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn expression(&mut self) -> Result<Vec<Factor>, ParseError> {
        let mut factors = self.factor()?;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Close(_) => break,
                TokenKind::Star => {
                    self.bump();
                    factors.extend(self.factor_after(&token)?);
                }
                TokenKind::Slash => {
                    self.bump();
                    let divisor = self.factor_after(&token)?;
                    factors.extend(divisor.into_iter().map(|f| Factor {
                        exponent: -f.exponent,
                        ..f
                    }));
                }
                TokenKind::Identifier | TokenKind::Number | TokenKind::Open(_) => {
                    factors.extend(self.factor()?);
                }
                TokenKind::Caret => {
                    return Err(error_at(ParseErrorKind::InvalidExponent, &token));
                }
                TokenKind::Plus | TokenKind::Minus => {
                    return Err(error_at(ParseErrorKind::UnexpectedCharacter, &token));
                }
            }
        }

        Ok(factors)
    }

    /// A factor that must follow the binary operator `op`.
    fn factor_after(&mut self, op: &Token<'a>) -> Result<Vec<Factor>, ParseError> {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Identifier | TokenKind::Number | TokenKind::Open(_)) => self.factor(),
            _ => Err(error_at(ParseErrorKind::MissingFactor, op)),
        }
    }

    fn factor(&mut self) -> Result<Vec<Factor>, ParseError> {
        let mut factors = self.primary()?;

        if let Some(caret) = self.peek().filter(|t| t.kind == TokenKind::Caret) {
            self.bump();
            let power = self.exponent(&caret)?;
            for factor in &mut factors {
                factor.exponent = &factor.exponent * &power;
            }
        }

        Ok(factors)
    }

    fn primary(&mut self) -> Result<Vec<Factor>, ParseError> {
        let Some(token) = self.bump() else {
            let end = self.input.len();
            return Err(ParseError::new(ParseErrorKind::MissingFactor, "", end));
        };

        match token.kind {
            TokenKind::Identifier => {
                let (prefix, base) = split_symbol(token.text)
                    .map_err(|_| error_at(ParseErrorKind::UnknownSymbol, &token))?;
                Ok(vec![Factor::new(prefix, base, Rational::one())])
            }
            TokenKind::Number if token.text == "1" => Ok(Vec::new()),
            TokenKind::Number => Err(error_at(ParseErrorKind::NumericFactor, &token)),
            TokenKind::Open(closer) => {
                let inner = self.expression()?;
                match self.bump() {
                    Some(close) if close.kind == TokenKind::Close(closer) => Ok(inner),
                    Some(other) => Err(error_at(ParseErrorKind::UnbalancedBracket, &other)),
                    None => Err(error_at(ParseErrorKind::UnbalancedBracket, &token)),
                }
            }
            _ => Err(error_at(ParseErrorKind::MissingFactor, &token)),
        }
    }

    fn exponent(&mut self, caret: &Token<'a>) -> Result<Rational, ParseError> {
        let parenthesized = self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Open(')'));
        if parenthesized {
            self.bump();
        }

        let negative = self.sign();
        let mut value = self.number().ok_or_else(|| self.exponent_error(caret))?;
        if parenthesized {
            if self.peek().is_some_and(|t| t.kind == TokenKind::Slash) {
                self.bump();
                let denominator = self
                    .number()
                    .filter(|d| !d.is_zero())
                    .ok_or_else(|| self.exponent_error(caret))?;
                value = value / denominator;
            }
            if !self.peek().is_some_and(|t| t.kind == TokenKind::Close(')')) {
                return Err(self.exponent_error(caret));
            }
            self.bump();
        }

        Ok(if negative { -value } else { value })
    }

    fn sign(&mut self) -> bool {
        match self.peek().map(|t| t.kind) {
            Some(TokenKind::Minus) => {
                self.bump();
                true
            }
            Some(TokenKind::Plus) => {
                self.bump();
                false
            }
            _ => false,
        }
    }

    fn number(&mut self) -> Option<Rational> {
        let token = self.peek().filter(|t| t.kind == TokenKind::Number)?;
        let value = token.text.parse().ok()?;
        self.bump();
        Some(value)
    }

    /// Reports the exponent from the caret through the offending token.
    fn exponent_error(&self, caret: &Token<'a>) -> ParseError {
        let end = self
            .tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(caret.end(), Token::end)
            .max(caret.end());
        ParseError::new(
            ParseErrorKind::InvalidExponent,
            &self.input[caret.position..end],
            caret.position,
        )
    }
}

fn error_at(kind: ParseErrorKind, token: &Token<'_>) -> ParseError {
    ParseError::new(kind, token.text, token.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseUnit;
    use crate::prefix::Prefix;

    fn factor(prefix: Option<Prefix>, base: BaseUnit, exponent: i64) -> Factor {
        Factor::new(prefix, base, Rational::from(exponent))
    }

    #[test]
    fn test_fraction_and_exponent_forms() {
        let fraction = parse_factors("m^3/s").unwrap();
        let exponent = parse_factors("m^3*s^-1").unwrap();
        assert_eq!(fraction, exponent);
        assert_eq!(
            fraction,
            vec![factor(None, BaseUnit::Metre, 3), factor(None, BaseUnit::Second, -1)]
        );
    }

    #[test]
    fn test_prefixed_compound() {
        let factors = parse_factors("kg*m^-1*s^-2").unwrap();
        assert_eq!(
            factors,
            vec![
                factor(Some(Prefix::Kilo), BaseUnit::Gram, 1),
                factor(None, BaseUnit::Metre, -1),
                factor(None, BaseUnit::Second, -2),
            ]
        );
    }

    #[test]
    fn test_slash_binds_one_factor() {
        let factors = parse_factors("kg/m*s").unwrap();
        assert_eq!(factors[1], factor(None, BaseUnit::Metre, -1));
        assert_eq!(factors[2], factor(None, BaseUnit::Second, 1));

        let grouped = parse_factors("kg/(m*s)").unwrap();
        assert_eq!(grouped[2], factor(None, BaseUnit::Second, -1));
    }

    #[test]
    fn test_repeated_symbols_fold() {
        assert_eq!(parse_factors("m*m").unwrap(), vec![factor(None, BaseUnit::Metre, 2)]);
        assert_eq!(parse_factors("m m m/s").unwrap()[0], factor(None, BaseUnit::Metre, 3));
        assert_eq!(parse_factors("m/m").unwrap(), vec![]);
        assert_eq!(parse_factors("s^0*m").unwrap(), vec![factor(None, BaseUnit::Metre, 1)]);
    }

    #[test]
    fn test_mixed_prefixes_stay_separate() {
        let factors = parse_factors("km*m").unwrap();
        assert_eq!(
            factors,
            vec![
                factor(Some(Prefix::Kilo), BaseUnit::Metre, 1),
                factor(None, BaseUnit::Metre, 1),
            ]
        );
    }

    #[test]
    fn test_juxtaposition() {
        assert_eq!(parse_factors("kg m").unwrap(), parse_factors("kg*m").unwrap());
        assert_eq!(parse_factors("m^2s^-1").unwrap(), parse_factors("m^2/s").unwrap());
        assert_eq!(parse_factors("(m)(s)").unwrap(), parse_factors("m*s").unwrap());
    }

    #[test]
    fn test_rational_exponents() {
        let half = Rational::from_i64(1, 2);
        let factors = parse_factors("m^(1/2)").unwrap();
        assert_eq!(factors[0].exponent, half);
        assert_eq!(parse_factors("m^0.5").unwrap(), factors);
        assert_eq!(parse_factors("m^(0.5)").unwrap(), factors);
        assert_eq!(
            parse_factors("s^(-3/2)").unwrap()[0].exponent,
            Rational::from_i64(-3, 2)
        );
    }

    #[test]
    fn test_group_powers() {
        assert_eq!(parse_factors("(m/s)^2").unwrap(), parse_factors("m^2/s^2").unwrap());
        assert_eq!(parse_factors("[kg/m^3]").unwrap(), parse_factors("kg/m^3").unwrap());
        assert_eq!(parse_factors("1/(m*s)^2").unwrap(), parse_factors("m^-2*s^-2").unwrap());
    }

    #[test]
    fn test_dimensionless_inputs() {
        assert_eq!(parse_factors("").unwrap(), vec![]);
        assert_eq!(parse_factors("   ").unwrap(), vec![]);
        assert_eq!(parse_factors("1").unwrap(), vec![]);
        assert_eq!(parse_factors("1/s").unwrap(), vec![factor(None, BaseUnit::Second, -1)]);
    }

    #[test]
    fn test_unknown_symbol_reports_fragment() {
        let err = parse_factors("kg*furlong/s").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownSymbol);
        assert_eq!(err.fragment, "furlong");
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_dangling_operators() {
        let err = parse_factors("m/").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingFactor);
        assert_eq!((err.fragment.as_str(), err.position), ("/", 1));

        let err = parse_factors("m**s").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingFactor);
        assert_eq!(err.position, 1);

        let err = parse_factors("*m").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingFactor);
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_invalid_exponents() {
        let err = parse_factors("m^").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
        assert_eq!((err.fragment.as_str(), err.position), ("^", 1));

        let err = parse_factors("m^x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
        assert_eq!(err.fragment, "^x");

        let err = parse_factors("m^(1/0)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);

        let err = parse_factors("m^2^3").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidExponent);
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_unbalanced_brackets() {
        let err = parse_factors("(m*s").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnbalancedBracket);
        assert_eq!((err.fragment.as_str(), err.position), ("(", 0));

        let err = parse_factors("m*s)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnbalancedBracket);
        assert_eq!(err.position, 3);

        let err = parse_factors("(m]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnbalancedBracket);
        assert_eq!(err.fragment, "]");
    }

    #[test]
    fn test_numeric_factor() {
        let err = parse_factors("2*m").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFactor);
        assert_eq!(err.fragment, "2");

        // `m^1/2` reads as `m^1 / 2`
        let err = parse_factors("m^1/2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NumericFactor);
        assert_eq!(err.position, 4);
    }
}
