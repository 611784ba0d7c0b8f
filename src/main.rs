//! venvman CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use venvman::cli::Cli;
use venvman::error::Result;
use venvman::pip::update;
use venvman::shell::SystemRunner;
use venvman::ui::{output, prompts};
use venvman::venv::Venv;
use venvman::{menu, net, python};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("venvman=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("venvman=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Every later operation depends on network-reachable package sources;
    // this is the one fatal, process-terminating check.
    if !net::check_online() {
        output::info("ERROR: venvman requires an internet connection to function.");
        output::info("Please check your connection and try again.");
        return ExitCode::from(1);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let runner = SystemRunner::new();

    if python::is_installed(&runner)? {
        output::info("Python is already installed.");
    } else {
        output::info("Python is not installed. Downloading and installing...");
        python::provision(&runner)?;
    }

    let venv_name = prompts::input_with_default("Enter the virtual environment name", "venv")?;
    let venv = Venv::new(venv_name);
    venv.ensure(&runner)?;

    update::check_for_updates(&runner, &venv)?;

    menu::run_loop(&runner, &venv)
}
