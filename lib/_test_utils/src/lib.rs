use color_eyre::eyre::eyre;

use setalg::core::op::tautology::{TautologyChecker, Verdict};
use setalg::core::options::Options;
use setalg::parser::parse;

/// Parses `input` and checks it with both enumeration strategies, which must agree.
pub fn check_both_ways(input: &str) -> color_eyre::Result<Verdict> {
    let parsed = parse(input).map_err(|e| eyre!("{} in {:?}", e, input))?;
    let n = parsed.number_of_atoms();
    println!("{} has {} atoms: {}", parsed.formula, n, parsed.atoms);

    let sequential = TautologyChecker::new(Options {
        parallel: false,
        ..Options::default()
    });
    let parallel = TautologyChecker::new(Options {
        parallel: true,
        parallel_threshold: 0,
        split_bits: 3,
        ..Options::default()
    });
    let verdict = sequential.check(&parsed.formula, n);
    let other = parallel.check(&parsed.formula, n);
    if verdict != other {
        return Err(eyre!("Sequential ({:?}) and parallel ({:?}) verdicts differ for {}", verdict, other, input));
    }
    Ok(verdict)
}

pub fn assert_tautology(input: &str) -> color_eyre::Result<()> {
    let verdict = check_both_ways(input)?;
    assert!(verdict.is_tautology(), "{input:?} should be a tautology, but is falsified by {verdict:?}");
    Ok(())
}

pub fn assert_not_tautology(input: &str) -> color_eyre::Result<()> {
    let verdict = check_both_ways(input)?;
    assert!(!verdict.is_tautology(), "{input:?} should not be a tautology");
    Ok(())
}
