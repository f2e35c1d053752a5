//! Formulas of set algebra, their evaluation under boolean valuations, and a
//! tautology checker enumerating all valuations.

pub mod atom_dict;
pub mod formula;
pub mod generator;
pub mod op;
pub mod options;
pub mod valuation;
