use std::ops::RangeInclusive;

use rand::Rng;

use crate::formula::Conn;

/// Shape of the generated formulas.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub factors: Vec<String>,
    pub connectives: Vec<Conn>,
    /// Number of binary connections in one formula.
    pub length: RangeInclusive<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            factors: ["0", "U", "A", "B", "C"].map(String::from).to_vec(),
            connectives: vec![Conn::Inter, Conn::Union, Conn::SubsetEq, Conn::Equal, Conn::Diff],
            length: 5..=15,
        }
    }
}

/// Generates a random right-nested formula such as `(A \cap (B = (0 \ C)))`,
/// spelled with ASCII connectives.
pub fn generate_formula<R: Rng + ?Sized>(rng: &mut R) -> String {
    generate_formula_with(rng, &GeneratorConfig::default())
}

pub fn generate_formula_with<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> String {
    assert!(!config.factors.is_empty(), "generator needs at least one factor");
    assert!(!config.connectives.is_empty(), "generator needs at least one connective");

    let length = rng.gen_range(config.length.clone());
    let mut output = String::new();
    for _ in 0..length {
        let factor = &config.factors[rng.gen_range(0..config.factors.len())];
        let conn = config.connectives[rng.gen_range(0..config.connectives.len())];
        output.push_str(&format!("({factor} {conn:#} "));
    }
    output.push_str(&config.factors[rng.gen_range(0..config.factors.len())]);
    output.push_str(&")".repeat(length));
    output
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_balanced_parentheses() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let s = generate_formula(&mut rng);
            let open = s.matches('(').count();
            let close = s.matches(')').count();
            assert_eq!(open, close, "unbalanced: {s}");
            assert!((5..=15).contains(&open), "bad length: {s}");
        }
    }

    #[test]
    fn test_custom_config() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GeneratorConfig {
            factors: vec!["X".to_string()],
            connectives: vec![Conn::Union],
            length: 2..=2,
        };
        assert_eq!(generate_formula_with(&mut rng, &config), "(X \\cup (X \\cup X))");
    }

    #[test]
    fn test_zero_length_is_single_factor() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig {
            factors: vec!["U".to_string()],
            length: 0..=0,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate_formula_with(&mut rng, &config), "U");
    }

    #[test]
    #[should_panic(expected = "at least one connective")]
    fn test_empty_connectives_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig {
            connectives: vec![],
            ..GeneratorConfig::default()
        };
        generate_formula_with(&mut rng, &config);
    }
}
