use crate::augmented_matrix::AugmentedMatrix;

pub struct BackwardsSubstitution {
    pub solution: Vec<f64>,
}

impl BackwardsSubstitution {
    pub fn zero(n: usize) -> Self {
        Self {
            solution: vec![0.0; n],
        }
    }

    // expects `u` to be upper triangular; the solution is indexed by column
    // position, not by original unknown
    pub fn solve(&mut self, u: &AugmentedMatrix) {
        let n = u.dimension();
        debug_assert_eq!(self.solution.len(), n);
        let mut i = n;
        while i > 0 {
            i -= 1;
            let row = &u.rows[i];
            let mut tmp = row[n];
            for j in (i + 1..n).rev() {
                tmp -= row[j] * self.solution[j];
            }
            self.solution[i] = tmp / row[i];
        }
    }
}

pub fn solve(u: &AugmentedMatrix) -> Vec<f64> {
    let mut solver = BackwardsSubstitution::zero(u.dimension());
    solver.solve(u);
    solver.solution
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solve_upper_triangular_system() {
        // x + 2y - z = 3, 4y + z = 9, 2z = 2
        let u = AugmentedMatrix::from_rows(vec![
            vec![1.0, 2.0, -1.0, 3.0],
            vec![0.0, 4.0, 1.0, 9.0],
            vec![0.0, 0.0, 2.0, 2.0],
        ])
        .unwrap();
        assert_eq!(solve(&u), vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn solver_can_be_reused_for_same_shape() {
        let mut solver = BackwardsSubstitution::zero(2);
        let a = AugmentedMatrix::from_rows(vec![vec![2.0, 1.0, 5.0], vec![0.0, 2.5, 7.5]]).unwrap();
        solver.solve(&a);
        assert_eq!(solver.solution, vec![1.0, 3.0]);
        let b = AugmentedMatrix::from_rows(vec![vec![1.0, 0.0, -1.0], vec![0.0, 1.0, 4.0]]).unwrap();
        solver.solve(&b);
        assert_eq!(solver.solution, vec![-1.0, 4.0]);
    }

    #[test]
    fn zero_diagonal_gives_non_finite_solution() {
        let u = AugmentedMatrix::from_rows(vec![vec![0.0, 1.0, 1.0], vec![0.0, 0.0, 2.0]]).unwrap();
        assert!(solve(&u).iter().any(|x| !x.is_finite()));
    }
}
