//! # JSON Token
//!
//! Defines the possible tokens produced by scanning a JSON-like document,
//! along with the keyword lookup for the `true`/`false`/`null` literals.
use std::fmt::Display;

/// The closed set of token kinds the lexer can emit.
///
/// The identifiers are stable: tests and any downstream consumer match on
/// them by name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /* Delimiters */
    /// Opening curly brace
    LeftBrace,

    /// Closing curly brace
    RightBrace,

    /// Opening square bracket
    LeftBracket,

    /// Closing square bracket
    RightBracket,

    /// Colon character
    Colon,

    /// Comma character
    Comma,

    /// A single quote character. The lexer never emits a token spanning a
    /// whole quoted string; each `"` is its own token and the interior is
    /// tokenized like any other text.
    DoubleQuote,

    /* Values */
    /// Maximal digit run scanned outside string mode
    Integer,

    /// Maximal letter-class run that is not a keyword
    Identifier,

    /// The literal `true`
    True,

    /// The literal `false`
    False,

    /// The literal `null`
    Null,

    /* Reserved */
    /// Unrecognized single character
    Illegal,

    /// Input exhausted; repeats on every further call
    EndOfInput,
}

impl TokenKind {
    /// Classifies a scanned letter-class run against the fixed keyword
    /// table. Anything not in the table is a generic [`Self::Identifier`].
    ///
    /// The table is a compile-time constant; nothing is rebuilt per call.
    #[must_use]
    pub fn lookup_identifier(text: &str) -> Self {
        match text {
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            _ => Self::Identifier,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
            Self::Colon => "Colon",
            Self::Comma => "Comma",
            Self::DoubleQuote => "DoubleQuote",
            Self::Integer => "Integer",
            Self::Identifier => "Identifier",
            Self::True => "True",
            Self::False => "False",
            Self::Null => "Null",
            Self::Illegal => "Illegal",
            Self::EndOfInput => "EndOfInput",
        };
        write!(f, "{name}")
    }
}

/// A single lexical unit: a kind plus the exact input substring that
/// produced it. Single-character tokens carry that character as a
/// one-character string; [`TokenKind::EndOfInput`] carries the empty
/// string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Builds a token from a kind and its source text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
