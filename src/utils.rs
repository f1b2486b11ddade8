//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{Token, TokenKind};

// ==============================================================================
// Colorized Token Output
// ==============================================================================

/// Write one token as a `Kind "text"` line to `writer`, with the kind
/// colorized by category. Silently returns `Ok(())` on broken pipe so
/// that piping to tools like `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_token<W: Write>(
    writer: &mut W,
    token: &Token,
) -> anyhow::Result<()> {
    let kind = token.kind.to_string();
    let colored_kind = match token.kind {
        TokenKind::LeftBrace
        | TokenKind::RightBrace
        | TokenKind::LeftBracket
        | TokenKind::RightBracket
        | TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::DoubleQuote => kind.cyan(),
        TokenKind::Integer => kind.yellow(),
        TokenKind::Identifier => kind.green(),
        TokenKind::True | TokenKind::False | TokenKind::Null => {
            kind.yellow().bold()
        }
        TokenKind::Illegal => kind.red().bold(),
        TokenKind::EndOfInput => kind.dimmed(),
    };

    let result =
        writeln!(writer, "{} {:?}", colored_kind, token.text);

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write token to output"),
    }
}

/// Convenience wrapper writing to a locked stdout handle.
///
/// # Errors
///
/// Returns an error if writing to stdout fails for any reason other than
/// a broken pipe.
pub fn print_token(token: &Token) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    write_token(&mut stdout, token)
}
