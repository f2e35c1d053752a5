use std::fmt::{Display, Formatter};

/// Binary connective of set algebra.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Conn {
    Inter,
    Union,
    Diff,
    SubsetEq,
    Equal,
}

impl Conn {
    pub const ALL: [Conn; 5] = [Conn::Inter, Conn::Union, Conn::Diff, Conn::SubsetEq, Conn::Equal];

    /// Combines the truth values of both sides.
    ///
    /// Under a valuation every set is either "everything" or "nothing", so each
    /// connective reduces to a boolean operation:
    ///
    /// | connective | meaning            |
    /// |------------|--------------------|
    /// | `∩`        | `lhs && rhs`       |
    /// | `∪`        | `lhs \|\| rhs`     |
    /// | `\`        | `lhs && !rhs`      |
    /// | `⊆`        | `!lhs \|\| rhs`    |
    /// | `=`        | `lhs == rhs`       |
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Conn::Inter => lhs && rhs,
            Conn::Union => lhs || rhs,
            Conn::Diff => lhs && !rhs,
            Conn::SubsetEq => !lhs || rhs,
            Conn::Equal => lhs == rhs,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Conn::Inter => "∩",
            Conn::Union => "∪",
            Conn::Diff => "\\",
            Conn::SubsetEq => "⊆",
            Conn::Equal => "=",
        }
    }

    /// ASCII spelling accepted by the tokenizer.
    pub const fn ascii(self) -> &'static str {
        match self {
            Conn::Inter => "\\cap",
            Conn::Union => "\\cup",
            Conn::Diff => "\\",
            Conn::SubsetEq => "\\subseteq",
            Conn::Equal => "=",
        }
    }
}

impl Display for Conn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.ascii())
        } else {
            write!(f, "{}", self.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(conn: Conn) -> [bool; 4] {
        [
            conn.apply(false, false),
            conn.apply(false, true),
            conn.apply(true, false),
            conn.apply(true, true),
        ]
    }

    #[test]
    fn test_truth_tables() {
        assert_eq!(table(Conn::Inter), [false, false, false, true]);
        assert_eq!(table(Conn::Union), [false, true, true, true]);
        assert_eq!(table(Conn::Diff), [false, false, true, false]);
        assert_eq!(table(Conn::SubsetEq), [true, true, false, true]);
        assert_eq!(table(Conn::Equal), [true, false, false, true]);
    }

    #[test]
    fn test_conn_display() {
        assert_eq!(Conn::ALL.map(|c| c.to_string()), ["∩", "∪", "\\", "⊆", "="]);
        assert_eq!(
            Conn::ALL.map(|c| format!("{c:#}")),
            ["\\cap", "\\cup", "\\", "\\subseteq", "="]
        );
    }
}
