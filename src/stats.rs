//! Subjects entered by the user and the aggregate record computed from them.

use serde::Serialize;

use crate::error::{GradeError, Result};
use crate::grade::{Grade, GradingScale};

/// A named subject and the marks obtained in it, out of 100.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    name: String,
    marks: f64,
}

impl Subject {
    /// Creates a subject, rejecting marks that are not a finite value in `0..=100`.
    pub fn new(name: impl Into<String>, marks: f64) -> Result<Self> {
        if !is_valid_marks(marks) {
            return Err(GradeError::MarksOutOfRange(marks));
        }
        Ok(Subject {
            name: name.into(),
            marks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }
}

/// Returns `true` for marks in the inclusive range `0..=100`.
pub fn is_valid_marks(marks: f64) -> bool {
    (0.0..=GradingScale::MAX_MARKS).contains(&marks)
}

/// Aggregate outcome for a list of subjects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub subject_count: usize,
    pub total_marks: f64,
    pub average_percentage: f64,
    pub grade: Grade,
    pub description: &'static str,
}

impl GradeResult {
    pub fn new(
        subject_count: usize,
        total_marks: f64,
        average_percentage: f64,
        grade: Grade,
    ) -> Self {
        GradeResult {
            subject_count,
            total_marks,
            average_percentage,
            grade,
            description: grade.description(),
        }
    }
}
