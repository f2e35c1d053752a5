#[derive(Debug, Clone)]
pub struct Options {
    // Parallel enumeration:
    pub parallel: bool,
    pub parallel_threshold: usize,
    pub split_bits: usize,
    // Driver limits:
    pub max_atoms: usize,
}

pub const DEFAULT_OPTIONS: Options = Options {
    // Parallel enumeration:
    parallel: true,
    parallel_threshold: 16,
    split_bits: 8,
    // Driver limits:
    max_atoms: 24,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}
