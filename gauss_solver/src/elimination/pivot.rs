use std::fmt;

use clap::ValueEnum;
use strum_macros::EnumIter;

use crate::augmented_matrix::AugmentedMatrix;

use super::permutation_history::PermutationHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, ValueEnum)]
pub enum PivotMode {
    #[value(name = "none")]
    NoPivot,
    #[value(name = "row")]
    RowPivot,
    #[value(name = "column")]
    ColumnPivot,
    #[value(name = "full")]
    FullPivot,
}

impl PivotMode {
    pub fn strategy(self) -> Box<dyn PivotStrategy> {
        match self {
            Self::NoPivot => Box::new(NoPivot),
            Self::RowPivot => Box::new(RowPivot),
            Self::ColumnPivot => Box::new(ColumnPivot),
            Self::FullPivot => Box::new(FullPivot),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::NoPivot => "no pivoting",
            Self::RowPivot => "row pivoting",
            Self::ColumnPivot => "column pivoting",
            Self::FullPivot => "full pivoting",
        }
    }
}

impl fmt::Display for PivotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Exchanges performed for one elimination step, as `(step, found)` pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PivotExchange {
    pub rows: Option<(usize, usize)>,
    pub columns: Option<(usize, usize)>,
}

/// Picks the pivot for `step` and moves it onto the diagonal.
///
/// Row exchanges reorder equations and are never recorded. Column exchanges
/// reorder unknowns, so they are mirrored into `history`.
pub trait PivotStrategy {
    fn select(
        &self,
        matrix: &mut AugmentedMatrix,
        step: usize,
        history: &mut PermutationHistory,
    ) -> PivotExchange;
}

pub struct NoPivot;

impl PivotStrategy for NoPivot {
    fn select(
        &self,
        _matrix: &mut AugmentedMatrix,
        _step: usize,
        _history: &mut PermutationHistory,
    ) -> PivotExchange {
        PivotExchange::default()
    }
}

/// Largest magnitude along the pivot row; brings it in with a column exchange.
pub struct RowPivot;

impl PivotStrategy for RowPivot {
    fn select(
        &self,
        matrix: &mut AugmentedMatrix,
        step: usize,
        history: &mut PermutationHistory,
    ) -> PivotExchange {
        let column = largest_in_row(matrix, step);
        PivotExchange {
            rows: None,
            columns: exchange_columns(matrix, history, step, column),
        }
    }
}

/// Largest magnitude down the pivot column; brings it in with a row exchange.
pub struct ColumnPivot;

impl PivotStrategy for ColumnPivot {
    fn select(
        &self,
        matrix: &mut AugmentedMatrix,
        step: usize,
        _history: &mut PermutationHistory,
    ) -> PivotExchange {
        let row = largest_in_column(matrix, step);
        PivotExchange {
            rows: exchange_rows(matrix, step, row),
            columns: None,
        }
    }
}

/// Largest magnitude in the whole active block.
pub struct FullPivot;

impl PivotStrategy for FullPivot {
    fn select(
        &self,
        matrix: &mut AugmentedMatrix,
        step: usize,
        history: &mut PermutationHistory,
    ) -> PivotExchange {
        let (row, column) = largest_in_block(matrix, step);
        PivotExchange {
            columns: exchange_columns(matrix, history, step, column),
            rows: exchange_rows(matrix, step, row),
        }
    }
}

// strict comparisons everywhere: on ties the first candidate in scan order wins

fn largest_in_row(matrix: &AugmentedMatrix, step: usize) -> usize {
    let row = &matrix.rows[step];
    let mut best = step;
    for column in step + 1..matrix.dimension() {
        if row[column].abs() > row[best].abs() {
            best = column;
        }
    }
    best
}

fn largest_in_column(matrix: &AugmentedMatrix, step: usize) -> usize {
    let mut best = step;
    for row in step + 1..matrix.dimension() {
        if matrix.get(row, step).abs() > matrix.get(best, step).abs() {
            best = row;
        }
    }
    best
}

fn largest_in_block(matrix: &AugmentedMatrix, step: usize) -> (usize, usize) {
    let n = matrix.dimension();
    let mut best = (step, step);
    let mut best_value = matrix.get(step, step).abs();
    for row in step..n {
        for column in step..n {
            let value = matrix.get(row, column).abs();
            if value > best_value {
                best = (row, column);
                best_value = value;
            }
        }
    }
    best
}

fn exchange_rows(matrix: &mut AugmentedMatrix, step: usize, found: usize) -> Option<(usize, usize)> {
    if found == step {
        return None;
    }
    matrix.swap_rows(step, found);
    Some((step, found))
}

fn exchange_columns(
    matrix: &mut AugmentedMatrix,
    history: &mut PermutationHistory,
    step: usize,
    found: usize,
) -> Option<(usize, usize)> {
    if found == step {
        return None;
    }
    matrix.swap_columns(step, found);
    history.swap(step, found);
    Some((step, found))
}
