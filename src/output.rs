//! Report formatting for grade results and the grading scale.
//!
//! Supports the fixed text blocks and pretty-printed JSON.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::grade::GradingScale;
use crate::stats::GradeResult;

pub const RESULTS_HEADER: &str = "===== GRADE CALCULATION RESULTS =====";
pub const RESULTS_FOOTER: &str = "=====================================";
pub const SCALE_HEADER: &str = "===== GRADING SCALE =====";
pub const SCALE_FOOTER: &str = "=========================";

/// Writes the result block, preceded by a blank line.
pub fn write_result<W: Write>(out: &mut W, result: &GradeResult) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{RESULTS_HEADER}")?;
    writeln!(out, "Total Marks: {:.2}", result.total_marks)?;
    writeln!(out, "Average Percentage: {:.2}%", result.average_percentage)?;
    writeln!(out, "Grade: {}", result.grade)?;
    writeln!(out, "Grade Description: {}", result.description)?;
    writeln!(out, "{RESULTS_FOOTER}")?;
    Ok(())
}

/// Writes the result as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, result: &GradeResult) -> Result<()> {
    debug!("{:#?}", result);
    writeln!(out)?;
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the grading-scale block, preceded by a blank line.
///
/// Lines are generated from `scale`, so they always agree with how results
/// were banded.
pub fn write_scale<W: Write>(out: &mut W, scale: &GradingScale) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{SCALE_HEADER}")?;
    for (grade, low, high) in scale.ranges() {
        writeln!(out, "{} ({}-{}): {}", grade, low, high, grade.description())?;
    }
    writeln!(out, "{SCALE_FOOTER}")?;
    Ok(())
}
