//! Command-line flags.
//!
//! All operational input (environment name, menu choices, package names) is
//! interactive; flags only tune logging and color.

use clap::Parser;

/// Interactive Python virtual environment and package helper.
#[derive(Debug, Parser)]
#[command(name = "venvman", version, about)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_default_to_off() {
        let cli = Cli::parse_from(["venvman"]);
        assert!(!cli.debug);
        assert!(!cli.no_color);
    }

    #[test]
    fn debug_flag_parses() {
        let cli = Cli::parse_from(["venvman", "--debug"]);
        assert!(cli.debug);
    }
}
