//! Error type shared by the grade calculator library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradeError {
    /// The evaluator was handed an empty subject list.
    #[error("cannot calculate a grade without any subjects")]
    NoSubjects,

    #[error("marks {0} are outside the range 0 to 100")]
    MarksOutOfRange(f64),

    /// The input stream ended while a value was still expected.
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),

    /// A custom grading scale broke one of the band rules.
    #[error("invalid grading scale: {0}")]
    InvalidScale(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;
