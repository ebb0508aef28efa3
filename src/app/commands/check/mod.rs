//! The `check` pipeline: load, validate, report.

mod summary;

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use crate::app::config::{load_config, validate_config};
use crate::domain::AppError;

/// Output format for check results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Banner, enumerated errors or summary.
    #[default]
    Text,
    /// One compact JSON object on stdout.
    Json,
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub config_path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Machine-readable check report emitted by `--format json`.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    config_path: String,
    valid: bool,
    errors: &'a [String],
    warnings: &'a [String],
}

/// Load the configuration, validate it, and report the outcome.
///
/// Warnings always go to stderr; stdout carries either the summary, the
/// 1-indexed error list, or the JSON report.
pub fn execute(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    if options.format == OutputFormat::Text {
        println!("Validating configuration: {}", options.config_path.display());
        println!("{}", "-".repeat(60));
    }

    let config = load_config(&options.config_path)?;
    let diagnostics = validate_config(&config);
    diagnostics.emit_warnings();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 { 1 } else { 0 };

    match options.format {
        OutputFormat::Json => {
            let report = CheckReport {
                config_path: options.config_path.display().to_string(),
                valid: errors == 0,
                errors: diagnostics.errors(),
                warnings: diagnostics.warnings(),
            };
            let json = serde_json::to_string(&report).map_err(|e| {
                AppError::Internal(format!("Failed to serialize check report: {e}"))
            })?;
            println!("{}", json);
        }
        OutputFormat::Text if errors > 0 => {
            println!("❌ Configuration validation failed:\n");
            for (index, message) in diagnostics.errors().iter().enumerate() {
                println!("  {}. {}", index + 1, message);
            }
            println!("\nPlease fix these errors and try again.");
        }
        OutputFormat::Text => {
            print!("{}", summary::render(&config));
        }
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}
