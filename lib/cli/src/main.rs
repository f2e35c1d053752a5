use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::bail;
use elapsed::measure_time;
use itertools::Itertools;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use setalg_core::atom_dict::AtomDict;
use setalg_core::formula::Formula;
use setalg_core::generator::generate_formula;
use setalg_core::op::tautology::{truth_table, TautologyChecker};
use setalg_core::options::{Options, DEFAULT_OPTIONS};
use setalg_core::valuation::Valuation;
use setalg_parser::{parse, Lexer};

mod parsing;

const HEADING_CHECK: &str = "CHECK OPTIONS";

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Formulas to check. Without any, formulas are read line by line from stdin.
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,

    /// File with one formula per line.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of random formulas to check in addition.
    #[arg(short, long, value_name = "INT", default_value_t = 0)]
    random: usize,

    /// Seed for the random formula generator.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Print the truth table of each formula.
    #[arg(long)]
    table: bool,

    /// Print the tokens of each formula.
    #[arg(long)]
    tokens: bool,

    /// Refuse formulas with more atoms than this.
    #[arg(help_heading = HEADING_CHECK)]
    #[arg(long, value_name = "INT")]
    #[arg(default_value_t = DEFAULT_OPTIONS.max_atoms)]
    max_atoms: usize,

    /// Always enumerate valuations sequentially.
    #[arg(help_heading = HEADING_CHECK)]
    #[arg(long)]
    no_parallel: bool,

    /// Minimal number of atoms for parallel enumeration.
    #[arg(help_heading = HEADING_CHECK)]
    #[arg(long, value_name = "INT")]
    #[arg(default_value_t = DEFAULT_OPTIONS.parallel_threshold)]
    parallel_threshold: usize,

    /// Number of atoms fixed per parallel task.
    #[arg(help_heading = HEADING_CHECK)]
    #[arg(long, value_name = "INT")]
    #[arg(default_value_t = DEFAULT_OPTIONS.split_bits)]
    split_bits: usize,

    /// More logging (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            parallel: !self.no_parallel,
            parallel_threshold: self.parallel_threshold,
            split_bits: self.split_bits,
            max_atoms: self.max_atoms,
        }
    }

    /// Stdin is only read when no other source of formulas is given.
    fn reads_stdin(&self) -> bool {
        self.formulas.is_empty() && self.input.is_none() && self.random == 0
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    TermLogger::init(args.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    debug!("args = {:?}", args);

    let formulas = if args.reads_stdin() {
        info!("Reading formulas from stdin...");
        parsing::read_formulas(io::stdin().lock())?
    } else {
        collect_formulas(&args)?
    };

    let num_failed = run(&args, &formulas);
    if num_failed > 0 {
        bail!("{} of {} formulas could not be checked", num_failed, formulas.len());
    }
    Ok(())
}

/// Formulas given on the command line, read from `--input`, and generated with `--random`.
fn collect_formulas(args: &Cli) -> color_eyre::Result<Vec<String>> {
    let mut formulas = args.formulas.clone();
    if let Some(path) = &args.input {
        info!("Reading formulas from {}", path.display());
        formulas.extend(parsing::read_formulas_from_file(path)?);
    }
    if args.random > 0 {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!("Generating {} random formulas...", args.random);
        formulas.extend((0..args.random).map(|_| generate_formula(&mut rng)));
    }
    Ok(formulas)
}

/// Checks every formula and returns the number of formulas that failed to parse or were refused.
fn run(args: &Cli, formulas: &[String]) -> usize {
    let checker = TautologyChecker::new(args.options());
    info!("options = {:?}", checker.options());

    let mut num_failed = 0;
    for input in formulas.iter() {
        if let Err(e) = check_one(args, &checker, input) {
            error!("{} in {:?}", e, input);
            num_failed += 1;
        }
    }
    num_failed
}

fn check_one(args: &Cli, checker: &TautologyChecker, input: &str) -> color_eyre::Result<()> {
    if args.tokens {
        println!("Tokens: {}", Lexer::new(input).map(|t| format!("{t:#}")).join(" "));
    }

    let parsed = parse(input)?;
    let n = parsed.number_of_atoms();
    info!("Parsed {} with {} atoms: {}", parsed.formula, n, parsed.atoms);
    let max_atoms = checker.options().max_atoms;
    if n > max_atoms {
        bail!("Formula has {} atoms, at most {} are allowed", n, max_atoms);
    }

    if args.table {
        print_truth_table(&parsed.formula, &parsed.atoms);
    }

    let (elapsed, verdict) = measure_time(|| checker.check(&parsed.formula, n));
    println!("Formula {} {}", parsed.formula, verdict);
    if let Some(valuation) = verdict.counterexample() {
        println!("    counterexample: {}", describe(valuation, &parsed.atoms));
    }
    info!("Checked 2^{} valuations in {}", n, elapsed);
    Ok(())
}

fn describe(valuation: &Valuation, atoms: &AtomDict) -> String {
    atoms
        .names()
        .iter()
        .zip(valuation.iter())
        .map(|(name, &value)| format!("{}={}", name, u8::from(value)))
        .join(" ")
}

fn print_truth_table(formula: &Formula, atoms: &AtomDict) {
    let names = atoms.names();
    println!("{} | {}", names.iter().join(" "), formula);
    for (valuation, value) in truth_table(formula, names.len()) {
        let row = names
            .iter()
            .zip(valuation.iter())
            .map(|(name, &x)| format!("{:>width$}", u8::from(x), width = name.chars().count()))
            .join(" ");
        println!("{} | {}", row, u8::from(value));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("setalg").chain(args.iter().copied()))
    }

    #[test]
    fn test_stdin_only_without_other_sources() {
        assert!(cli(&[]).reads_stdin());
        assert!(cli(&["-v"]).reads_stdin());
        assert!(!cli(&["A ∪ U"]).reads_stdin());
        assert!(!cli(&["--random", "3"]).reads_stdin());
        assert!(!cli(&["--input", "formulas.txt"]).reads_stdin());
    }

    #[test]
    fn test_empty_input_file_gives_no_formulas() {
        let path = std::env::temp_dir().join(format!("setalg-empty-{}.txt", std::process::id()));
        fs::write(&path, "# nothing here\n\n").unwrap();
        let args = cli(&["--input", path.to_str().unwrap()]);
        let formulas = collect_formulas(&args).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!args.reads_stdin());
        assert!(formulas.is_empty());
    }

    #[test]
    fn test_random_formulas_are_seeded() {
        let args = cli(&["A", "--random", "4", "--seed", "42"]);
        let formulas = collect_formulas(&args).unwrap();
        assert_eq!(formulas.len(), 5);
        assert_eq!(formulas[0], "A");
        assert_eq!(formulas, collect_formulas(&args).unwrap());
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let args = cli(&["--max-atoms", "2"]);
        let formulas = ["(A ∪ B) ∪ C", "(A", "A ∪ U", "(A ∩ B) ⊆ A"].map(String::from);
        assert_eq!(run(&args, &formulas), 2);
        let checker = TautologyChecker::new(args.options());
        assert!(check_one(&args, &checker, "(A ∪ B) ∪ C").is_err());
        assert!(check_one(&args, &checker, "(A ∩ B) ⊆ A").is_ok());
    }
}
