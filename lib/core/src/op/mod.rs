pub mod tautology;
