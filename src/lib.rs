pub mod entry;
pub mod error;
pub mod evaluator;
pub mod grade;
pub mod output;
pub mod session;
pub mod stats;

pub use error::GradeError;
pub use grade::{Grade, GradeBand, GradingScale};
pub use stats::{GradeResult, Subject};
