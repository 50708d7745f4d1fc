//! CLI entry point for the grade calculator.
//!
//! Reads subjects and marks interactively from stdin and prints the grade
//! report and grading scale to stdout.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grade_calculator::GradingScale;
use grade_calculator::session::{ReportFormat, run_session};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{self, LevelFilter},
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calculator", version)]
#[command(about = "Calculate total, average and letter grade for a list of subjects", long_about = None)]
struct Cli {
    /// How to print the result block
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// `warn` applies only when `RUST_LOG` carries no directives.
fn log_filter_builder() -> filter::Builder {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("RUST_LOG")
}

fn main() -> Result<()> {
    // Logs go to stderr so prompts and the report own stdout
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(log_filter_builder().from_env_lossy());

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();
    debug!(format = ?ReportFormat::from(cli.format), "Starting grade calculator");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &GradingScale::standard(),
        cli.format.into(),
    )
    .context("Grade calculation did not complete")?;

    Ok(())
}
