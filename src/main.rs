//! Moodle Organizer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use moodle_organizer::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    organize,
    output::{print_config_summary, print_error, print_summary},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::FileNotFound(_)
                | Error::NotADirectory(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::RosterParse(_) => ExitCode::from(exit_codes::ROSTER_ERROR as u8),
                Error::NoMatchingStudent(_) | Error::DuplicateSubmission { .. } => {
                    ExitCode::from(exit_codes::RESOLUTION_ERROR as u8)
                }
                Error::Io(_) | Error::Archive(_) => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    let directory = args.directory.clone();
    args.merge_into_config(&mut config);

    // Set up logging
    let log_level = if config.options.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Validate configuration before touching anything
    validate_config(&directory, &config)?;

    print_config_summary(&directory.display().to_string(), &config);

    // Run the passes
    let summary = organize::run(&directory, &config)?;

    print_summary(&summary);
    Ok(())
}
