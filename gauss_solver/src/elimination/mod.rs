pub mod backwards_substitution;
pub mod gaussian_elimination;
pub mod permutation_history;
pub mod pivot;
pub mod solution_reorderer;

pub use gaussian_elimination::{eliminate, EliminationEngine};
pub use permutation_history::PermutationHistory;
pub use pivot::{PivotExchange, PivotMode, PivotStrategy};
