use super::permutation_history::PermutationHistory;

/// Sorts `solution` into original unknown order, using `history` as the key.
///
/// Adjacent pairs are swapped until a full pass is clean, which leaves
/// `history` as the identity again.
pub fn reorder(history: &mut PermutationHistory, solution: &mut [f64]) {
    debug_assert_eq!(history.len(), solution.len());
    let mut is_done = false;
    while !is_done {
        is_done = true;
        for i in 1..solution.len() {
            if history.positions[i - 1] > history.positions[i] {
                history.swap(i - 1, i);
                solution.swap(i - 1, i);
                is_done = false;
            }
        }
    }
}
