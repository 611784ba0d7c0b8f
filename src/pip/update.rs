//! Outdated-package queries and upgrades.

use crate::error::Result;
use crate::pip::{listing, markers};
use crate::shell::{command::describe_exit, CommandRunner};
use crate::ui::{output, prompts, TaskProgress};
use crate::venv::Venv;

/// Query for outdated packages and, if the user confirms, upgrade them all.
pub fn check_for_updates(runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    output::info("Checking for outdated packages...");
    let outdated = listing::outdated(runner, venv)?;
    if outdated.is_empty() {
        output::info("All packages are up to date.");
        return Ok(());
    }

    output::info(&format!("Found {} outdated package(s).", outdated.len()));
    if prompts::confirm("Do you want to update all outdated packages?")? {
        update_packages(runner, venv, &outdated)?;
    }
    Ok(())
}

/// Upgrade the given packages sequentially, one subprocess each.
///
/// Returns the number of upgrades whose subprocess failed.
pub fn update_packages(
    runner: &dyn CommandRunner,
    venv: &Venv,
    packages: &[String],
) -> Result<usize> {
    let progress = TaskProgress::sized("Updating packages", packages.len() as u64);
    let mut failures = 0usize;

    for package in packages {
        let result = runner.run_streaming(
            &venv.python_path(),
            &["-m", "pip", "install", "--upgrade", package],
            &mut |line| {
                if let Some(pkg) = markers::collecting_package(line) {
                    progress.set_label(&format!("Updating: {pkg}"));
                }
            },
        )?;

        if !result.success {
            failures += 1;
            output::warn(&format!(
                "Upgrade of {package} failed ({})",
                describe_exit(result.exit_code)
            ));
        }
        progress.inc(1);
    }

    if failures == 0 {
        progress.finish_success("All selected packages updated.");
    } else {
        progress.finish_error(&format!(
            "{failures} of {} upgrades failed",
            packages.len()
        ));
    }
    Ok(failures)
}
