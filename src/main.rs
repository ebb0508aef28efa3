use std::path::PathBuf;
use std::process;

use clap::Parser;
use orgcfg::{CheckOptions, DEFAULT_CONFIG_PATH, EXAMPLE_CONFIG_PATH, OutputFormat};

#[derive(Parser)]
#[command(name = "orgcfg")]
#[command(version)]
#[command(about = "Validate organization toolkit YAML configuration", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Validate the example config instead
    #[arg(short, long)]
    example: bool,

    /// Output format for check results
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let config_path =
        if cli.example { PathBuf::from(EXAMPLE_CONFIG_PATH) } else { cli.config };

    match orgcfg::check(CheckOptions { config_path, format: cli.format }) {
        Ok(outcome) => process::exit(outcome.exit_code),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}
