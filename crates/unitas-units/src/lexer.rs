//! Tokenizer for unit expressions.

use crate::error::{ParseError, ParseErrorKind};

/// Token categories.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    /// A run of letters: a possibly prefixed unit symbol.
    Identifier,
    /// Digits with an optional decimal fraction.
    Number,
    /// `*`, `·` or `⋅`.
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// An opening bracket and the closer it expects.
    Open(char),
    /// A closing bracket.
    Close(char),
}

/// A token borrowed from the input, with its byte offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    /// The category.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: &'a str,
    /// Byte offset of `text` in the input.
    pub position: usize,
}

impl Token<'_> {
    /// Byte offset just past this token.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }
}

/// Splits `input` into tokens, skipping whitespace.
///
/// # Errors
///
/// Returns `UnexpectedCharacter` for any character outside the unit
/// expression alphabet.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let kind = match c {
            '*' | '·' | '⋅' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '(' => Some(TokenKind::Open(')')),
            '[' => Some(TokenKind::Open(']')),
            '{' => Some(TokenKind::Open('}')),
            ')' | ']' | '}' => Some(TokenKind::Close(c)),
            _ => None,
        };
        if let Some(kind) = kind {
            chars.next();
            let end = start + c.len_utf8();
            tokens.push(Token {
                kind,
                text: &input[start..end],
                position: start,
            });
            continue;
        }

        let (kind, end) = if c.is_alphabetic() {
            (TokenKind::Identifier, scan_while(&mut chars, input.len(), char::is_alphabetic))
        } else if c.is_ascii_digit() || (c == '.' && starts_digit(&input[start + 1..])) {
            let mut end = scan_while(&mut chars, input.len(), |ch| ch.is_ascii_digit());
            if input[end..].starts_with('.') {
                chars.next();
                end = scan_while(&mut chars, input.len(), |ch| ch.is_ascii_digit());
            }
            (TokenKind::Number, end)
        } else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedCharacter,
                c.to_string(),
                start,
            ));
        };

        tokens.push(Token {
            kind,
            text: &input[start..end],
            position: start,
        });
    }

    Ok(tokens)
}

fn starts_digit(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Consumes characters while `accept` holds, returning the offset of the
/// first rejected character, or `len` at end of input.
fn scan_while<I>(
    chars: &mut std::iter::Peekable<I>,
    len: usize,
    accept: impl Fn(char) -> bool,
) -> usize
where
    I: Iterator<Item = (usize, char)>,
{
    while let Some(&(i, c)) = chars.peek() {
        if !accept(c) {
            return i;
        }
        chars.next();
    }
    len
}
