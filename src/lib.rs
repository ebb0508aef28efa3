//! orgcfg: load, validate, and summarize organization toolkit configuration.
//!
//! The pipeline is a single pass: read `config/config.yaml`, overlay the
//! file values onto the defaults, collect every validation finding, and
//! print either a summary or the full error list. Other organization
//! management tooling consumes [`load_config`]/[`validate_config`]
//! directly; the `orgcfg` binary is the diagnostic entry point.

pub mod app;
pub mod domain;

pub use app::commands::check::{CheckOptions, CheckOutcome, OutputFormat};
pub use app::config::{Diagnostics, load_config, validate_config};
pub use domain::config::{DEFAULT_CONFIG_PATH, EXAMPLE_CONFIG_PATH};
pub use domain::{AppError, Config};

/// Load the configuration at the given path, validate it, and report the
/// outcome on stdout/stderr.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    app::commands::check::execute(options)
}
