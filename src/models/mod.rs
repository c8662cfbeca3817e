//! Data types delivered by task sources.

pub mod outcome;
pub mod task;

pub use outcome::Outcome;
pub use task::Task;
