/*!
Main binary for jsonlex.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::debug;
use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
};

use jsonlex::{
    repl,
    tokenizer::{Lexer, TokenKind},
    utils,
};

/// Tokenize a JSON-like document into a flat stream of lexical tokens.
#[derive(Parser)]
#[command(name = "jlx", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional path to input file. If omitted or `-`, reads from STDIN
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Start an interactive session scanning one line at a time
    #[arg(short, long, action = ArgAction::SetTrue)]
    interactive: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Entry point for main binary.
///
/// Reads the whole input up front (a file path argument, or STDIN when
/// the path is omitted or `-`), then scans it and prints one token per
/// line up to and including the end-of-input token. With
/// `--interactive`, runs the line-by-line loop instead.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    if args.interactive {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        return repl::start(stdin, stdout);
    }

    // Parse input content
    let input_content = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| {
                format!("Failed to read file {}", path.display())
            })?,
        None if io::stdin().is_terminal() => {
            // No piped input and no file specified
            let mut cmd = Args::command();
            return Ok(cmd.print_help()?);
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from STDIN")?;
            buffer
        }
    };

    debug!("scanning {} byte(s) of input", input_content.len());

    let mut lexer = Lexer::new(&input_content);
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;

        utils::print_token(&token)?;

        if done {
            break;
        }
    }

    Ok(())
}
