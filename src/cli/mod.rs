use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{AppError, ServiceabilityReport, assess};
use crate::domain::{DEFAULT_FACTOR, Factor, format_amount, parse_factor};
use crate::io::{export, loader};
use crate::logging;

/// Solvendo - Loan Serviceability Calculator
#[derive(Parser)]
#[command(name = "solvendo")]
#[command(about = "Calculates the serviceability of a loan application record")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append log output to a file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the serviceability of an application record
    Assess {
        /// Path to the application JSON file
        input: PathBuf,

        /// Scaling factor applied to the surplus (e.g., "2"; defaults to 1.5)
        #[arg(short, long)]
        factor: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an application record without reporting serviceability
    Check {
        /// Path to the application JSON file
        input: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose, self.log_file.as_deref())?;

        match self.command {
            Commands::Assess {
                input,
                factor,
                format,
                output,
            } => run_assess(&input, factor.as_deref(), &format, output.as_deref()),
            Commands::Check { input } => run_check(&input),
        }
    }
}

fn resolve_factor(raw: Option<&str>) -> Result<Factor, AppError> {
    match raw {
        Some(s) => parse_factor(s).map_err(|_| AppError::InvalidFactor(s.to_string())),
        None => Ok(DEFAULT_FACTOR),
    }
}

fn run_assess(
    input: &Path,
    factor: Option<&str>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    // Factor problems surface before the record is even loaded.
    let factor = resolve_factor(factor)?;

    let record = loader::load_application(input)
        .with_context(|| format!("Failed to load application from {}", input.display()))?;
    tracing::debug!(
        "Loaded application: {} income entries, {} expense entries",
        record.income.len(),
        record.expenses.len()
    );

    let assessment = assess(&record, factor)?;
    for warning in &assessment.warnings {
        tracing::warn!("{}", warning);
    }

    let report = ServiceabilityReport::new(&assessment, factor);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_report(file, &report, format)?;
            println!("Report written to {}", path.display());
        }
        None => write_report(std::io::stdout(), &report, format)?,
    }

    Ok(())
}

fn write_report<W: std::io::Write>(
    writer: W,
    report: &ServiceabilityReport,
    format: &str,
) -> Result<()> {
    match format {
        "json" => export::write_report_json(writer, report),
        "csv" => export::write_report_csv(writer, report),
        _ => print_report_table(writer, report),
    }
}

fn print_report_table<W: std::io::Write>(
    mut writer: W,
    report: &ServiceabilityReport,
) -> Result<()> {
    writeln!(writer, "Serviceability Report")?;
    writeln!(
        writer,
        "Generated: {} (factor {})",
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.factor
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Total monthly income:   {:>15}",
        format_amount(report.total_monthly_income)
    )?;
    writeln!(
        writer,
        "Total monthly expenses: {:>15}",
        format_amount(report.total_monthly_expenses)
    )?;
    writeln!(writer, "{}", "-".repeat(40))?;
    writeln!(
        writer,
        "Surplus:                {:>15}",
        format_amount(report.surplus)
    )?;
    writeln!(
        writer,
        "Serviceability:         {:>15}",
        format_amount(report.serviceability)
    )?;

    if report.skipped_income_entries > 0 {
        writeln!(writer)?;
        writeln!(
            writer,
            "Skipped income entries: {}",
            report.skipped_income_entries
        )?;
    }

    Ok(())
}

fn run_check(input: &Path) -> Result<()> {
    let record = loader::load_application(input)
        .with_context(|| format!("Failed to load application from {}", input.display()))?;

    // Runs the full computation to catch malformed expenses, then discards
    // the numbers.
    let assessment = assess(&record, DEFAULT_FACTOR)?;

    println!("Application record is valid.");
    println!("  Income entries:  {}", record.income.len());
    println!("  Expense entries: {}", record.expenses.len());

    if !assessment.warnings.is_empty() {
        println!("  Skipped income entries: {}", assessment.warnings.len());
        for warning in &assessment.warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}
