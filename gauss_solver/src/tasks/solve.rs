use std::path::Path;

use anyhow::{Context, Result};

use crate::augmented_matrix::{loader::load_augmented_matrix, AugmentedMatrix};
use crate::elimination::{
    backwards_substitution, solution_reorderer::reorder, EliminationEngine, PermutationHistory,
    PivotMode,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub mode: PivotMode,
    // indexed by original unknown
    pub values: Vec<f64>,
    // identity once `values` has been reordered
    pub history: PermutationHistory,
}

impl Solution {
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }
}

/// Eliminates, back-substitutes and reorders; consumes the matrix.
pub fn solve_system(mut matrix: AugmentedMatrix, mode: PivotMode) -> Solution {
    let mut history = EliminationEngine::new(mode).eliminate(&mut matrix);
    let mut values = backwards_substitution::solve(&matrix);
    reorder(&mut history, &mut values);
    Solution {
        mode,
        values,
        history,
    }
}

pub fn run(mode: PivotMode, input_path: &Path) -> Result<Solution> {
    let matrix = load_augmented_matrix(input_path)
        .with_context(|| format!("loading system for {mode}"))?;
    log::info!(
        "solving {n}x{n} system from {} with {mode}",
        input_path.display(),
        n = matrix.dimension()
    );
    let original = matrix.clone();
    let solution = solve_system(matrix, mode);
    if solution.is_finite() {
        log::debug!(
            "max |b - Ax| = {:e}",
            original.max_abs_residual(&solution.values)
        );
    } else {
        log::warn!(
            "{mode} produced non-finite values for {}, the pivot hit zero",
            input_path.display()
        );
    }
    Ok(solution)
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::Rng;
    use strum::IntoEnumIterator;

    use super::*;

    fn system(a: &[Vec<f64>], b: &[f64]) -> AugmentedMatrix {
        AugmentedMatrix::from_system(a, b).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (a - e).abs() <= tolerance * e.abs().max(1.0),
                "{actual:?} != {expected:?}"
            );
        }
    }

    // strictly diagonally dominant, so nonsingular and no zero pivots
    fn random_system(rng: &mut impl Rng, n: usize) -> AugmentedMatrix {
        let a = (0..n)
            .map(|i| {
                let mut row = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect_vec();
                row[i] = n as f64 + rng.gen_range(1.0..2.0);
                row
            })
            .collect_vec();
        let b = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect_vec();
        system(&a, &b)
    }

    #[test]
    fn worked_example_agrees_for_every_mode() {
        for mode in PivotMode::iter() {
            let m = system(&[vec![2.0, 1.0], vec![1.0, 3.0]], &[5.0, 10.0]);
            let solution = solve_system(m, mode);
            assert_close(&solution.values, &[1.0, 3.0], 1e-12);
            assert_eq!(solution.history.positions, vec![0, 1], "{mode}");
        }
    }

    #[test]
    fn identity_returns_rhs() {
        let n = 5;
        let a = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect_vec())
            .collect_vec();
        let b = vec![3.0, -1.5, 0.0, 7.25, 2.0];
        for mode in PivotMode::iter() {
            assert_eq!(solve_system(system(&a, &b), mode).values, b, "{mode}");
        }
    }

    #[test]
    fn all_modes_satisfy_the_original_system() {
        let mut rng = rand::thread_rng();
        for n in 1..8 {
            let m = random_system(&mut rng, n);
            let solutions = PivotMode::iter()
                .map(|mode| solve_system(m.clone(), mode))
                .collect_vec();
            for solution in solutions.iter() {
                assert!(solution.history.is_identity());
                assert!(m.max_abs_residual(&solution.values) < 1e-9, "{}", solution.mode);
                assert_close(&solution.values, &solutions[0].values, 1e-9);
            }
        }
    }

    #[test]
    fn pivoting_modes_handle_a_zero_leading_entry() {
        // x2 = 1, x1 + x2 + x3 = 5, 2x1 - x3 = -1  =>  x = (1, 1, 3)
        let a = [
            vec![0.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
            vec![2.0, 0.0, -1.0],
        ];
        let b = [1.0, 5.0, -1.0];
        for mode in [PivotMode::RowPivot, PivotMode::ColumnPivot, PivotMode::FullPivot] {
            let solution = solve_system(system(&a, &b), mode);
            assert_close(&solution.values, &[1.0, 1.0, 3.0], 1e-12);
        }
        assert!(!solve_system(system(&a, &b), PivotMode::NoPivot).is_finite());
    }

    #[test]
    fn row_pivot_swaps_unknowns_back() {
        // largest entries of each pivot row sit off the diagonal
        let a = [
            vec![1.0, 10.0, 0.0],
            vec![0.0, 1.0, 8.0],
            vec![6.0, 0.0, 1.0],
        ];
        let x = [2.0, -1.0, 0.5];
        let b = a
            .iter()
            .map(|row| row.iter().zip(&x).map(|(a, x)| a * x).sum::<f64>())
            .collect_vec();
        let solution = solve_system(system(&a, &b), PivotMode::RowPivot);
        assert_close(&solution.values, &x, 1e-12);
    }

    #[test]
    fn run_reports_missing_file() {
        let err = run(PivotMode::FullPivot, Path::new("no/such/plik.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/plik.csv"));
    }
}
