//! # Tokenizer/ Lexer
//!
//! Scans an input string from a JSON-like document into a token stream.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{Lexer, tokenize};
pub use token::{Token, TokenKind};
