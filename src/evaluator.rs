//! Turns a list of subjects into a [`GradeResult`].

use tracing::debug;

use crate::error::{GradeError, Result};
use crate::grade::GradingScale;
use crate::stats::{GradeResult, Subject};

/// Evaluates `subjects` against the standard scale.
///
/// # Errors
///
/// Returns [`GradeError::NoSubjects`] if `subjects` is empty.
pub fn evaluate(subjects: &[Subject]) -> Result<GradeResult> {
    evaluate_with(&GradingScale::standard(), subjects)
}

/// Sums the marks, averages them over the subject count and bands the
/// average with `scale`.
pub fn evaluate_with(scale: &GradingScale, subjects: &[Subject]) -> Result<GradeResult> {
    if subjects.is_empty() {
        return Err(GradeError::NoSubjects);
    }

    let total = subjects.iter().map(Subject::marks).sum::<f64>();
    let average = total / subjects.len() as f64;
    let grade = scale.classify(average);

    debug!(subjects = subjects.len(), total, average, grade = %grade, "Evaluated subjects");

    Ok(GradeResult::new(subjects.len(), total, average, grade))
}
