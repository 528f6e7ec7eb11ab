pub mod budget;
pub mod delegation;
pub mod iterative;

pub use budget::ResolutionBudget;
pub use iterative::IterativeResolver;
