use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;

use super::matrix::AugmentedMatrix;

const VALUE_DELIMITER: char = ';';
// tolerated between the last coefficient and the right-hand side
const RHS_SEPARATOR: char = '|';

pub fn load_augmented_matrix(path: &Path) -> Result<AugmentedMatrix> {
    let file = File::open(path)
        .with_context(|| format!("opening input file {}", path.display()))?;
    read_augmented_matrix(BufReader::new(file))
        .with_context(|| format!("reading augmented matrix from {}", path.display()))
}

// first line: n, then n lines of `a_1;...;a_n;b` where an empty field
// or a `|` may stand between a_n and b
pub fn read_augmented_matrix<R: BufRead>(source: R) -> Result<AugmentedMatrix> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)))
        .filter_ok(|(_, l)| !l.trim().is_empty());

    let (line_number, header) = match lines.next() {
        Some(line) => line.context("reading dimension line")?,
        None => bail!("input is empty, expected the matrix dimension on the first line"),
    };
    let dimension: usize = header
        .trim()
        .trim_end_matches(VALUE_DELIMITER)
        .trim()
        .parse()
        .with_context(|| format!("line {line_number}: invalid matrix dimension {header:?}"))?;
    ensure!(dimension > 0, "line {line_number}: matrix dimension must be positive");
    let width = dimension
        .checked_add(1)
        .with_context(|| format!("line {line_number}: matrix dimension {dimension} is too large"))?;

    // grown row by row, the header alone is not trusted for an allocation
    let mut rows = Vec::new();
    for row_idx in 0..dimension {
        let (line_number, line) = match lines.next() {
            Some(line) => line.with_context(|| format!("reading row {}", row_idx + 1))?,
            None => bail!("expected {dimension} rows, found only {row_idx}"),
        };
        let row = parse_row(&line, width)
            .with_context(|| format!("line {line_number}: malformed row {}", row_idx + 1))?;
        rows.push(row);
    }
    log::trace!("read {dimension}x{width} augmented matrix");
    AugmentedMatrix::from_rows(rows)
}

fn parse_row(line: &str, width: usize) -> Result<Vec<f64>> {
    let values = line
        .split(|c: char| c == VALUE_DELIMITER || c == RHS_SEPARATOR)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<f64>()
                .with_context(|| format!("{field:?} is not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;
    ensure!(
        values.len() == width,
        "found {} values, expected {} coefficients and a right-hand side",
        values.len(),
        width - 1
    );
    Ok(values)
}
