pub mod loader;
pub mod matrix;

pub use matrix::AugmentedMatrix;
