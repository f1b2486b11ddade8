//! # JSON Lexer
//!
//! Scans an input string from a JSON-like document into a sequence of
//! [`Token`]s in a single left-to-right pass with no lookahead. The lexer
//! never fails: every input character maps to exactly one token, with
//! [`TokenKind::Illegal`] covering anything unrecognized. Structural
//! validation is left to a downstream parser.
use crate::tokenizer::{Token, TokenKind};

/// Classification of a single input byte, dispatched on by
/// [`Lexer::next_token`].
///
/// Digits belong to the letter class as well; they get their own tag here
/// so that the digit-run versus identifier-run precedence is a single
/// explicit match arm rather than nested conditionals.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ByteClass {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    Quote,
    /// `0-9`
    Digit,
    /// `a-z`, `A-Z`, `_`, `-` (digits carry the `Digit` tag instead)
    Letter,
    /// Space, tab, newline, carriage return
    Whitespace,
    /// The 0 sentinel set once the input is exhausted
    End,
    Other,
}

const fn classify(byte: u8) -> ByteClass {
    match byte {
        b'{' => ByteClass::LeftBrace,
        b'}' => ByteClass::RightBrace,
        b'[' => ByteClass::LeftBracket,
        b']' => ByteClass::RightBracket,
        b':' => ByteClass::Colon,
        b',' => ByteClass::Comma,
        b'"' => ByteClass::Quote,
        b' ' | b'\t' | b'\n' | b'\r' => ByteClass::Whitespace,
        0 => ByteClass::End,
        b'0'..=b'9' => ByteClass::Digit,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'-' => ByteClass::Letter,
        _ => ByteClass::Other,
    }
}

/// A lexer over a complete in-memory document.
///
/// Holds the borrowed input and a scan cursor; each [`Self::next_token`]
/// call advances the cursor past the token it produces. The instance is
/// plain single-owner mutable state: drive it from one caller and drop it
/// when done.
pub struct Lexer<'a> {
    /// The complete source text, immutable for the lexer's lifetime
    input: &'a str,
    /// Current position (current byte)
    position: usize,
    /// Current reading position (after current byte)
    read_position: usize,
    /// Current byte under examination; 0 once input is exhausted
    byte: u8,
    /// Toggled on every quote scanned. While set, a digit starts an
    /// identifier run instead of a numeric run. Quotes are toggled, not
    /// counted, so an unbalanced quote desynchronizes the mode for the
    /// rest of the document.
    in_string: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input` with the cursor primed on the first
    /// byte. The empty string is valid and yields
    /// [`TokenKind::EndOfInput`] immediately.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            byte: 0,
            in_string: false,
        };
        // put the lexer in an initial working state
        lexer.read_byte();
        lexer
    }

    /// Reads and consumes the next byte in the input sequence.
    fn read_byte(&mut self) {
        if self.read_position >= self.input.len() {
            self.byte = 0; // end sentinel
        } else {
            self.byte = self.input.as_bytes()[self.read_position];
        }
        // Advance the positions
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Consumes whitespace byte(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while classify(self.byte) == ByteClass::Whitespace {
            self.read_byte();
        }
    }

    /// Returns the next token in the input from the current position.
    ///
    /// Once the input is exhausted this keeps returning
    /// [`TokenKind::EndOfInput`] with empty text on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match classify(self.byte) {
            ByteClass::LeftBrace => self.single_byte(TokenKind::LeftBrace),
            ByteClass::RightBrace => self.single_byte(TokenKind::RightBrace),
            ByteClass::LeftBracket => self.single_byte(TokenKind::LeftBracket),
            ByteClass::RightBracket => {
                self.single_byte(TokenKind::RightBracket)
            }
            ByteClass::Colon => self.single_byte(TokenKind::Colon),
            ByteClass::Comma => self.single_byte(TokenKind::Comma),
            ByteClass::Quote => {
                self.in_string = !self.in_string;
                self.single_byte(TokenKind::DoubleQuote)
            }
            // The cursor stays put, so every later call lands here again.
            ByteClass::End => Token::new(TokenKind::EndOfInput, ""),
            ByteClass::Digit if !self.in_string => self.read_number(),
            // A digit inside string mode starts an identifier run, exactly
            // like a letter would.
            ByteClass::Digit | ByteClass::Letter => self.read_identifier(),
            ByteClass::Other => self.read_illegal(),
            ByteClass::Whitespace => {
                unreachable!("whitespace is consumed before dispatch")
            }
        }
    }

    /// Emits a token for the single byte under the cursor and advances
    /// past it.
    fn single_byte(&mut self, kind: TokenKind) -> Token {
        let token =
            Token::new(kind, &self.input[self.position..=self.position]);
        self.read_byte();
        token
    }

    /// Consumes a maximal digit run and returns an integer token. The
    /// consuming loop leaves the cursor just past the run; no further
    /// advance happens in the caller.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        while classify(self.byte) == ByteClass::Digit {
            self.read_byte();
        }
        Token::new(TokenKind::Integer, &self.input[start..self.position])
    }

    /// Consumes a maximal letter-class run (letters, digits, `_`, `-`)
    /// and classifies it against the keyword table.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while matches!(
            classify(self.byte),
            ByteClass::Letter | ByteClass::Digit
        ) {
            self.read_byte();
        }
        let text = &self.input[start..self.position];
        Token::new(TokenKind::lookup_identifier(text), text)
    }

    /// Emits an illegal token for the character under the cursor.
    ///
    /// Consumes the whole character, not just one byte, so a multi-byte
    /// UTF-8 sequence is never split across tokens.
    fn read_illegal(&mut self) -> Token {
        let rest = &self.input[self.position..];
        let width = rest.chars().next().map_or(1, char::len_utf8);
        let token = Token::new(TokenKind::Illegal, &rest[..width]);
        for _ in 0..width {
            self.read_byte();
        }
        token
    }
}

/// Tokenizes a complete document, returning every token up to and
/// including the final [`TokenKind::EndOfInput`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token> = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;

        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
