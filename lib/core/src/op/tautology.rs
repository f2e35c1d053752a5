use std::fmt::{Display, Formatter};

use log::{debug, info};
use rayon::prelude::*;

use crate::formula::Formula;
use crate::options::Options;
use crate::valuation::{advance, all_valuations, Valuation};

/// Upper bound on the number of prefix bits fixed per parallel task.
const MAX_SPLIT_BITS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Tautology,
    /// First falsifying valuation in enumeration order.
    Falsified(Valuation),
}

impl Verdict {
    pub fn is_tautology(&self) -> bool {
        matches!(self, Verdict::Tautology)
    }

    pub fn counterexample(&self) -> Option<&Valuation> {
        match self {
            Verdict::Tautology => None,
            Verdict::Falsified(valuation) => Some(valuation),
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Tautology => write!(f, "is a tautology"),
            Verdict::Falsified(_) => write!(f, "isn't a tautology"),
        }
    }
}

/// Decides tautologies by evaluating a formula under every valuation of its atoms.
#[derive(Debug, Clone, Default)]
pub struct TautologyChecker {
    options: Options,
}

impl TautologyChecker {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Evaluates `formula` under all `2^num_atoms` valuations.
    pub fn check(&self, formula: &Formula, num_atoms: usize) -> Verdict {
        let split_bits = self.options.split_bits.min(MAX_SPLIT_BITS).min(num_atoms);
        let verdict = if self.options.parallel && num_atoms >= self.options.parallel_threshold && split_bits > 0 {
            debug!("Checking {} atoms in parallel, {} prefix bits per task", num_atoms, split_bits);
            check_parallel(formula, num_atoms, split_bits)
        } else {
            debug!("Checking {} atoms sequentially", num_atoms);
            check_sequential(formula, num_atoms)
        };
        match &verdict {
            Verdict::Tautology => info!("{} is a tautology", formula),
            Verdict::Falsified(valuation) => info!("{} is falsified by {}", formula, valuation),
        }
        verdict
    }

    pub fn is_tautology(&self, formula: &Formula, num_atoms: usize) -> bool {
        self.check(formula, num_atoms).is_tautology()
    }
}

/// Rows of the truth table of `formula`, in enumeration order.
pub fn truth_table(formula: &Formula, num_atoms: usize) -> impl Iterator<Item = (Valuation, bool)> + '_ {
    all_valuations(num_atoms).map(move |valuation| {
        let value = formula.eval(&valuation);
        (valuation, value)
    })
}

fn check_sequential(formula: &Formula, num_atoms: usize) -> Verdict {
    let mut buffer = vec![true; num_atoms];
    match first_falsifying(formula, &mut buffer, num_atoms) {
        Some(valuation) => Verdict::Falsified(valuation),
        None => Verdict::Tautology,
    }
}

// Positions `[n - k, n)` are fixed per task, where `k = split_bits`. Tasks are
// ordered like the enumeration itself, so `find_map_first` returns the same
// counterexample as the sequential check.
fn check_parallel(formula: &Formula, num_atoms: usize, split_bits: usize) -> Verdict {
    let low = num_atoms - split_bits;
    let found = (0..1usize << split_bits).into_par_iter().find_map_first(|prefix| {
        let mut buffer = vec![true; num_atoms];
        for (j, value) in buffer[low..].iter_mut().enumerate() {
            *value = (prefix >> j) & 1 == 0;
        }
        first_falsifying(formula, &mut buffer, low)
    });
    match found {
        Some(valuation) => Verdict::Falsified(valuation),
        None => Verdict::Tautology,
    }
}

/// Enumerates the first `free` positions of `buffer` (starting from all `true`),
/// keeping the rest fixed.
fn first_falsifying(formula: &Formula, buffer: &mut [bool], free: usize) -> Option<Valuation> {
    loop {
        if !formula.eval(buffer) {
            return Some(Valuation::new(buffer.to_vec()));
        }
        if !advance(&mut buffer[..free]) {
            return None;
        }
    }
}
