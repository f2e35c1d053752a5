use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;

/// Reads one formula per line, skipping blank lines and `#` comments.
pub fn read_formulas<R>(reader: R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut formulas = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        formulas.push(line.to_string());
    }
    Ok(formulas)
}

pub fn read_formulas_from_file<P>(path: P) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_formulas(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_formulas_skips_blank_and_comments() {
        let input = "# set identities\nA ∪ U\n\n   \n  (A = A)  \n#A\n";
        let formulas = read_formulas(input.as_bytes()).unwrap();
        assert_eq!(formulas, vec!["A ∪ U", "(A = A)"]);
    }
}
