use log::trace;

use crate::token::{Token, TokenKind};

/// Symbolic lexemes, tried in order before atoms.
/// Multi-character spellings come first so that `\cap` is not read as `\` followed by `cap`.
const SYMBOLS: [(&str, TokenKind); 13] = [
    ("\\cap", TokenKind::Inter),
    ("\\cup", TokenKind::Union),
    ("\\subseteq", TokenKind::SubsetEq),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("∩", TokenKind::Inter),
    ("∪", TokenKind::Union),
    ("-", TokenKind::Diff),
    ("\\", TokenKind::Diff),
    ("⊆", TokenKind::SubsetEq),
    ("=", TokenKind::Equal),
    ("≡", TokenKind::Equal),
    ("∅", TokenKind::EmptySet),
];

/// Transforms an input string into a sequence of tokens, with one token of lookahead.
///
/// Use [`Lexer::peek`] to look at the next token and [`Lexer::next_token`] to
/// consume it. The lexer also iterates over all tokens before end of input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Unconsumed input. Invariant: never starts with whitespace.
    input: &'a str,
    /// The next token, if already scanned.
    peeked: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.trim_start(),
            peeked: None,
        }
    }

    /// Determines the next token without consuming it.
    fn scan_token(&self) -> Token<'a> {
        let input = self.input;
        if input.is_empty() {
            return Token::EOF;
        }
        for (lexeme, kind) in SYMBOLS {
            if input.starts_with(lexeme) {
                return Token::new(kind, &input[..lexeme.len()]);
            }
        }
        let len = input
            .char_indices()
            .find(|(_, c)| !c.is_alphanumeric())
            .map_or(input.len(), |(i, _)| i);
        if len > 0 {
            let value = &input[..len];
            let kind = if value == "0" { TokenKind::EmptySet } else { TokenKind::Atom };
            return Token::new(kind, value);
        }
        let len = input.chars().next().map_or(0, char::len_utf8);
        Token::new(TokenKind::Invalid, &input[..len])
    }

    /// Looks ahead at the next token. Never fails: returns [`Token::EOF`] at the end of input.
    pub fn peek(&mut self) -> Token<'a> {
        match self.peeked {
            Some(token) => token,
            None => {
                let token = self.scan_token();
                trace!("peek = {:#}", token);
                self.peeked = Some(token);
                token
            }
        }
    }

    /// Returns the next token and removes it from the input.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = self.peek();
        self.input = self.input[token.value.len()..].trim_start();
        self.peeked = None;
        token
    }

    /// Remaining input, including the token peeked at.
    pub fn remaining(&self) -> &'a str {
        self.input
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token {
                kind: TokenKind::Eof, ..
            } => None,
            token => Some(token),
        }
    }
}
