/*!
# `jsonlex` Library

A standalone lexical tokenizer for JSON-like text: raw input goes in,
a flat stream of classified tokens comes out. No parse tree, no
structural validation.
*/

pub mod repl;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use tokenizer::{Lexer, Token, TokenKind, tokenize};
