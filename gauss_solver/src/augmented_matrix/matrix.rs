use anyhow::{ensure, Result};
use itertools::Itertools;

// n rows of n coefficients followed by the right-hand side
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    pub dimension: usize,
    pub rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = rows.len();
        ensure!(dimension > 0, "an augmented matrix needs at least one row");
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == dimension + 1,
                "row {} has {} values, expected {} coefficients and a right-hand side",
                idx + 1,
                row.len(),
                dimension
            );
        }
        Ok(Self { dimension, rows })
    }

    /// Builds `[A | b]` from a square coefficient block and a right-hand side.
    pub fn from_system(a: &[Vec<f64>], b: &[f64]) -> Result<Self> {
        ensure!(
            a.len() == b.len(),
            "{} equations but {} right-hand side values",
            a.len(),
            b.len()
        );
        let rows = a
            .iter()
            .zip(b)
            .map(|(row, rhs)| row.iter().copied().chain(std::iter::once(*rhs)).collect_vec())
            .collect_vec();
        Self::from_rows(rows)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn rhs_column(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn rhs(&self, r: usize) -> f64 {
        self.rows[r][self.rhs_column()]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    // only the coefficient block; the right-hand side never moves sideways
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.dimension && b < self.dimension);
        for row in self.rows.iter_mut() {
            row.swap(a, b);
        }
    }

    pub fn coefficient_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|row| &row[..self.rhs_column()])
    }

    /// `b - A·x` for every equation.
    pub fn residual(&self, solution: &[f64]) -> Vec<f64> {
        debug_assert_eq!(solution.len(), self.dimension);
        self.coefficient_rows()
            .enumerate()
            .map(|(r, coefficients)| {
                let ax: f64 = coefficients.iter().zip(solution).map(|(a, x)| a * x).sum();
                self.rhs(r) - ax
            })
            .collect()
    }

    pub fn max_abs_residual(&self, solution: &[f64]) -> f64 {
        self.residual(solution)
            .into_iter()
            .map(f64::abs)
            .fold(0.0, f64::max)
    }
}
