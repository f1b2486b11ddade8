//! # Interactive Token Loop
//!
//! A read-token-print loop: each input line is scanned with a fresh
//! [`Lexer`] and its tokens are printed one per line, stopping before the
//! end-of-input token. The loop exits when the input stream closes.
use anyhow::Context as _;
use log::debug;
use std::io::{BufRead, Write};

use crate::tokenizer::{Lexer, TokenKind};
use crate::utils::write_token;

/// Prompt shown before each input line.
pub const PROMPT: &str = ">> ";

/// Runs the interactive loop over `input`, writing prompts and tokens to
/// `output`. Generic over reader and writer so tests can drive it with
/// in-memory buffers.
///
/// # Errors
///
/// Returns an error if reading a line or writing to `output` fails.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    loop {
        write!(output, "{PROMPT}").context("write prompt")?;
        output.flush().context("flush prompt")?;

        let mut line = String::new();
        let bytes_read =
            input.read_line(&mut line).context("read input line")?;
        if bytes_read == 0 {
            // stream closed
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        let mut count: usize = 0;
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            write_token(&mut output, &token)?;
            count += 1;
        }
        debug!("scanned {count} token(s) from line");
    }
}
