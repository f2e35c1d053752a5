//! Tokenizer and recursive descent parser for formulas of set algebra.

pub use error::{ParseError, Result};
pub use lexer::Lexer;
pub use parser::{parse, FormulaParser, Parsed};
pub use token::{Token, TokenKind};

pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
