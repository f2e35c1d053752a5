use snafu::Snafu;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Input does not match the grammar. Parsing stops at the first such error.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[allow(clippy::enum_variant_names)]
pub enum ParseError {
    #[snafu(display("Parse error: expected beginning of formula at {:?}", remaining))]
    ExpectedFormula { remaining: String },

    #[snafu(display("Parse error: expected ')' at {:?}", remaining))]
    ExpectedRParen { remaining: String },

    #[snafu(display("Parse error: expected end of input at {:?}", remaining))]
    ExpectedEnd { remaining: String },
}

impl ParseError {
    pub fn message(&self) -> &'static str {
        match self {
            ParseError::ExpectedFormula { .. } => "expected beginning of formula",
            ParseError::ExpectedRParen { .. } => "expected ')'",
            ParseError::ExpectedEnd { .. } => "expected end of input",
        }
    }

    /// Unconsumed input at the point of failure.
    pub fn remaining(&self) -> &str {
        match self {
            ParseError::ExpectedFormula { remaining }
            | ParseError::ExpectedRParen { remaining }
            | ParseError::ExpectedEnd { remaining } => remaining,
        }
    }
}
