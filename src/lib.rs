//! Tautology checking for fully parenthesized formulas of set algebra.
//!
//! ```
//! assert!(setalg::check("A ∪ U").unwrap().is_tautology());
//! assert!(!setalg::check("A ∩ A").unwrap().is_tautology());
//! ```

use log::debug;

pub use setalg_core as core;
pub use setalg_parser as parser;

use crate::core::op::tautology::{TautologyChecker, Verdict};
use crate::parser::{parse, ParseError};

/// Parses `input` and decides whether it is a tautology, using the default options.
pub fn check(input: &str) -> Result<Verdict, ParseError> {
    let parsed = parse(input)?;
    debug!("{} has {} atoms", parsed.formula, parsed.number_of_atoms());
    Ok(TautologyChecker::default().check(&parsed.formula, parsed.number_of_atoms()))
}
