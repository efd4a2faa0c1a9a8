pub mod augmented_matrix;
pub mod elimination;
pub mod tasks;
