use std::fmt::{Display, Formatter};

use setalg_core::formula::Conn;

/// Classification of tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Set variable; `U` is the universe.
    Atom,
    /// Empty set: `0` or `∅`.
    EmptySet,
    LParen,
    RParen,
    /// `∩` or `\cap`.
    Inter,
    /// `∪` or `\cup`.
    Union,
    /// `\` or `-`.
    Diff,
    /// `⊆` or `\subseteq`.
    SubsetEq,
    /// `=` or `≡`.
    Equal,
    /// Unrecognized character.
    Invalid,
    /// End of input.
    Eof,
}

/// A single token, borrowing its lexeme from the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
}

impl<'a> Token<'a> {
    pub const EOF: Token<'static> = Token::new(TokenKind::Eof, "");

    pub const fn new(kind: TokenKind, value: &'a str) -> Self {
        Self { kind, value }
    }

    /// The connective this token denotes, if any.
    pub fn connective(&self) -> Option<Conn> {
        match self.kind {
            TokenKind::Inter => Some(Conn::Inter),
            TokenKind::Union => Some(Conn::Union),
            TokenKind::Diff => Some(Conn::Diff),
            TokenKind::SubsetEq => Some(Conn::SubsetEq),
            TokenKind::Equal => Some(Conn::Equal),
            _ => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{:?}({:?})", self.kind, self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
