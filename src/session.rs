//! One complete calculator run over an arbitrary input/output pair.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::entry::{read_subject, read_subject_count};
use crate::evaluator::evaluate_with;
use crate::grade::GradingScale;
use crate::output::{write_json, write_result, write_scale};
use crate::stats::GradeResult;

pub const BANNER: &str = "===== GRADE CALCULATOR =====";

/// How the result block is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Collects subjects from `input`, evaluates them, and writes the report and
/// grading scale to `output`.
#[tracing::instrument(skip(input, output, scale))]
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    scale: &GradingScale,
    format: ReportFormat,
) -> Result<GradeResult> {
    writeln!(output, "{BANNER}")?;
    let count = read_subject_count(input, output)?;
    info!(count, "Collecting subjects");

    let subjects = (1..=count)
        .map(|index| read_subject(input, output, index))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read subjects")?;

    let result = evaluate_with(scale, &subjects)?;
    info!(
        total = result.total_marks,
        average = result.average_percentage,
        grade = %result.grade,
        "Grade calculated"
    );

    match format {
        ReportFormat::Text => write_result(output, &result)?,
        ReportFormat::Json => write_json(output, &result)?,
    }
    write_scale(output, scale)?;
    output.flush()?;

    Ok(result)
}
