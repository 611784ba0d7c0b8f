//! Manifest export.

use std::path::Path;

use crate::error::{Result, VenvmanError};
use crate::pip::listing::parse_freeze;
use crate::shell::{command::display_command, CommandRunner};
use crate::ui::output;
use crate::venv::Venv;

/// Default manifest file name, written into the working directory.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Write `pip freeze` output verbatim to [`DEFAULT_MANIFEST`], overwriting
/// any existing file.
pub fn export_manifest(runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    export_manifest_to(runner, venv, Path::new(DEFAULT_MANIFEST))
}

/// Write `pip freeze` output verbatim to `dest`.
pub fn export_manifest_to(runner: &dyn CommandRunner, venv: &Venv, dest: &Path) -> Result<()> {
    output::info(&format!("Generating {}...", dest.display()));

    let python = venv.python_path();
    let args = ["-m", "pip", "freeze"];
    let result = runner.run(&python, &args)?;
    if !result.success {
        return Err(VenvmanError::CommandFailed {
            command: display_command(&python, &args),
            code: result.exit_code,
        });
    }

    std::fs::write(dest, &result.stdout)?;

    tracing::debug!(
        "froze {} package(s) to {}",
        parse_freeze(&result.stdout).len(),
        dest.display()
    );
    output::info(&format!("{} created successfully.", dest.display()));
    Ok(())
}
