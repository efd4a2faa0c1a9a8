pub mod report;
pub mod solve;
pub mod task_plan;

pub use solve::{run, solve_system, Solution};
pub use task_plan::{Task, TaskPlan};
