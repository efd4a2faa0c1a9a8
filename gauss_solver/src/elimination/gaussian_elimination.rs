use crate::augmented_matrix::AugmentedMatrix;

use super::permutation_history::PermutationHistory;
use super::pivot::{PivotMode, PivotStrategy};

pub struct EliminationEngine {
    mode: PivotMode,
    strategy: Box<dyn PivotStrategy>,
}

impl EliminationEngine {
    pub fn new(mode: PivotMode) -> Self {
        Self {
            mode,
            strategy: mode.strategy(),
        }
    }

    /// Reduces `matrix` to upper triangular form in place.
    ///
    /// A zero pivot is divided by as-is, so a singular (or unluckily ordered
    /// under `NoPivot`) system comes out full of infinities and NaNs.
    pub fn eliminate(&self, matrix: &mut AugmentedMatrix) -> PermutationHistory {
        let n = matrix.dimension();
        let mut history = PermutationHistory::identity(n);
        for step in 0..n.saturating_sub(1) {
            self.pivot_step(matrix, step, &mut history);
            reduce_below_pivot(matrix, step);
        }
        debug_assert!(history.is_permutation());
        history
    }

    fn pivot_step(
        &self,
        matrix: &mut AugmentedMatrix,
        step: usize,
        history: &mut PermutationHistory,
    ) {
        let exchange = self.strategy.select(matrix, step, history);
        if let Some((a, b)) = exchange.rows {
            log::debug!("{}: step {step} exchanged rows {a} and {b}", self.mode);
        }
        if let Some((a, b)) = exchange.columns {
            log::debug!("{}: step {step} exchanged columns {a} and {b}", self.mode);
        }
        log::trace!("step {step} pivot = {}", matrix.get(step, step));
    }
}

pub fn eliminate(matrix: &mut AugmentedMatrix, mode: PivotMode) -> PermutationHistory {
    EliminationEngine::new(mode).eliminate(matrix)
}

fn reduce_below_pivot(matrix: &mut AugmentedMatrix, step: usize) {
    let (above, below) = matrix.rows.split_at_mut(step + 1);
    let pivot_row = &above[step];
    let pivot = pivot_row[step];
    for row in below.iter_mut() {
        let p = row[step] / pivot;
        for (value, pivot_value) in row[step..].iter_mut().zip(&pivot_row[step..]) {
            *value -= p * pivot_value;
        }
    }
}
