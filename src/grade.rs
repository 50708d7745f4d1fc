//! Letter grades and the banded scale that assigns them.

use serde::Serialize;
use std::fmt;

use crate::error::{GradeError, Result};

/// A letter grade, ordered from `F` (lowest) to `A` (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Very Good",
            Grade::C => "Good",
            Grade::D => "Satisfactory",
            Grade::F => "Needs Improvement",
        }
    }

    /// Ordinal rank of the grade: `A` is 4, `F` is 0.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// One row of a [`GradingScale`]: averages at or above `min` earn `grade`
/// unless a higher band already matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub grade: Grade,
    pub min: f64,
}

/// Threshold table mapping an average percentage to a [`Grade`].
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | F     |
///
/// Bands are kept sorted by descending `min` and matched top-down, so a
/// value sitting exactly on a threshold lands in the higher band. Minimums
/// are whole marks, distinct, and the lowest band starts at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingScale {
    bands: Vec<GradeBand>,
}

static STANDARD_BANDS: &[(Grade, f64)] = &[
    (Grade::A, 90.0),
    (Grade::B, 80.0),
    (Grade::C, 70.0),
    (Grade::D, 60.0),
    (Grade::F, 0.0),
];

impl GradingScale {
    pub const MAX_MARKS: f64 = 100.0;

    /// The fixed A/B/C/D/F scale used by the calculator.
    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS
                .iter()
                .map(|&(grade, min)| GradeBand { grade, min })
                .collect(),
        }
    }

    /// Builds a scale from bands in any order, sorting them highest first.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::InvalidScale`] if `bands` is empty, a minimum is
    /// not a whole mark in `0..=100`, two bands share a minimum, or no band
    /// starts at 0.
    pub fn new(mut bands: Vec<GradeBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(GradeError::InvalidScale("no bands"));
        }
        if bands
            .iter()
            .any(|b| !(0.0..=Self::MAX_MARKS).contains(&b.min) || b.min.fract() != 0.0)
        {
            return Err(GradeError::InvalidScale(
                "band minimums must be whole marks between 0 and 100",
            ));
        }

        bands.sort_by(|a, b| b.min.total_cmp(&a.min));

        if bands.windows(2).any(|pair| pair[0].min == pair[1].min) {
            return Err(GradeError::InvalidScale("two bands share a minimum"));
        }
        if bands.last().map(|b| b.min) != Some(0.0) {
            return Err(GradeError::InvalidScale("lowest band must start at 0"));
        }
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Returns the grade of the first band whose minimum `average` reaches.
    ///
    /// Anything below every band falls into the lowest one.
    pub fn classify(&self, average: f64) -> Grade {
        self.bands
            .iter()
            .find(|band| average >= band.min)
            .or_else(|| self.bands.last())
            .map(|band| band.grade)
            .unwrap_or(Grade::F)
    }

    /// Inclusive display range `(grade, low, high)` for every band.
    ///
    /// The top band runs to [`Self::MAX_MARKS`]; every other band stops one
    /// mark below the band above it.
    pub fn ranges(&self) -> impl Iterator<Item = (Grade, f64, f64)> + '_ {
        self.bands.iter().enumerate().map(|(i, band)| {
            let high = match i {
                0 => Self::MAX_MARKS,
                _ => self.bands[i - 1].min - 1.0,
            };
            (band.grade, band.min, high)
        })
    }
}

impl Default for GradingScale {
    fn default() -> Self {
        Self::standard()
    }
}
