//! site - business site front-end
//!
//! Bootstraps the session store and navigation table, then runs one command.
//!
//! # Examples
//!
//! ```bash
//! # Sign in with any identity payload
//! site login '{"name": "John", "email": "john@example.com"}'
//!
//! # Browse: scroll the gallery, open booking, come back
//! site visit /gallery scroll:1200 /booking back --pretty
//! ```

use site_cli::{App, AppError, cli::Cli, commands, logging::setup_logging};
use site_config::Config;

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    match config.log_dir() {
        Ok(log_dir) => {
            if let Err(e) = setup_logging(&log_dir, config.logging.level) {
                eprintln!("Warning: {e}");
            }
        }
        Err(e) => eprintln!("Warning: {e}"),
    }

    info!("Starting site v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = match App::bootstrap(&config) {
        Ok(app) => app,
        Err(e) => return fail(&e),
    };

    let value = match commands::execute(&mut app, cli.command) {
        Ok(value) => value,
        Err(e) => return fail(&e),
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<Config, AppError> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

fn fail(error: &AppError) -> ExitCode {
    eprintln!("Error: {error}");
    if let Some(hint) = error.recovery_hint() {
        eprintln!();
        eprintln!("{hint}");
    }
    ExitCode::FAILURE
}
