use log::debug;
use snafu::ensure;

use setalg_core::atom_dict::AtomDict;
use setalg_core::formula::Formula;

use crate::error::{ExpectedEndSnafu, ExpectedFormulaSnafu, ExpectedRParenSnafu, Result};
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Recursive descent parser for fully parenthesized formulas of set algebra:
///
/// ```text
/// formula    ::= factor [ connective factor ]
/// factor     ::= '(' formula ')' | atom | emptyset
/// connective ::= '∩' | '∪' | '\' | '⊆' | '='
/// ```
///
/// There are no operator precedences, so `A ∩ B ∩ C` has to be written as
/// either `(A ∩ B) ∩ C` or `A ∩ (B ∩ C)`.
///
/// Atoms get their identifiers from the parser's own [`AtomDict`] while they
/// are read, so after parsing the formula refers to atoms `0..number_of_atoms()`.
///
/// Each level of parentheses costs one level of recursion, so extremely deep
/// nesting (tens of thousands of levels) overflows the stack. Inputs are
/// expected to stay within a few thousand levels.
#[derive(Debug)]
pub struct FormulaParser<'a> {
    lexer: Lexer<'a>,
    atom_dict: AtomDict,
}

impl<'a> FormulaParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            atom_dict: AtomDict::new(),
        }
    }

    /// Parses the whole input into a single formula.
    pub fn parse(&mut self) -> Result<Formula> {
        debug!("parse({:?})", self.lexer.remaining());
        let formula = self.parse_formula()?;
        self.parse_eof()?;
        Ok(formula)
    }

    /// Number of distinct atoms seen so far.
    pub fn number_of_atoms(&self) -> usize {
        self.atom_dict.number_of_atoms()
    }

    pub fn atom_dict(&self) -> &AtomDict {
        &self.atom_dict
    }

    pub fn into_atom_dict(self) -> AtomDict {
        self.atom_dict
    }

    fn parse_formula(&mut self) -> Result<Formula> {
        debug!("formula at {:?}", self.lexer.remaining());
        let lhs = self.parse_factor()?;
        self.parse_connective(lhs)
    }

    fn parse_factor(&mut self) -> Result<Formula> {
        debug!("factor at {:?}", self.lexer.remaining());
        let token = self.lexer.peek();
        match token.kind {
            TokenKind::LParen => {
                self.lexer.next_token();
                let formula = self.parse_formula()?;
                self.parse_rparen()?;
                Ok(formula)
            }
            TokenKind::EmptySet => {
                self.lexer.next_token();
                Ok(Formula::Atom(self.atom_dict.atom("∅")))
            }
            TokenKind::Atom => {
                self.lexer.next_token();
                Ok(Formula::Atom(self.atom_dict.atom(token.value)))
            }
            _ => ExpectedFormulaSnafu {
                remaining: self.lexer.remaining(),
            }
            .fail(),
        }
    }

    /// If a connective comes next, parses the second factor. Otherwise returns `lhs` as is.
    fn parse_connective(&mut self, lhs: Formula) -> Result<Formula> {
        match self.lexer.peek().connective() {
            None => Ok(lhs),
            Some(conn) => {
                debug!("connective {} at {:?}", conn, self.lexer.remaining());
                self.lexer.next_token();
                let rhs = self.parse_factor()?;
                Ok(Formula::bin(lhs, conn, rhs))
            }
        }
    }

    fn parse_rparen(&mut self) -> Result<()> {
        ensure!(
            self.lexer.peek().kind == TokenKind::RParen,
            ExpectedRParenSnafu {
                remaining: self.lexer.remaining(),
            }
        );
        self.lexer.next_token();
        Ok(())
    }

    fn parse_eof(&mut self) -> Result<()> {
        ensure!(
            self.lexer.peek().kind == TokenKind::Eof,
            ExpectedEndSnafu {
                remaining: self.lexer.remaining(),
            }
        );
        Ok(())
    }
}

/// Result of parsing one input: the formula and the atoms discovered along the way.
#[derive(Debug, Clone)]
pub struct Parsed {
    pub formula: Formula,
    pub atoms: AtomDict,
}

impl Parsed {
    pub fn number_of_atoms(&self) -> usize {
        self.atoms.number_of_atoms()
    }
}

pub fn parse(input: &str) -> Result<Parsed> {
    let mut parser = FormulaParser::new(input);
    let formula = parser.parse()?;
    Ok(Parsed {
        formula,
        atoms: parser.into_atom_dict(),
    })
}
