//! Package installation.

use std::path::Path;

use crate::error::Result;
use crate::pip::{listing, manifest, markers};
use crate::shell::{command::describe_exit, CommandRunner};
use crate::ui::{output, TaskProgress};
use crate::venv::Venv;

/// Install a single package, skipping when it is already present.
///
/// The skip check is case-insensitive against the current installed set and
/// issues no install subprocess when it matches.
pub fn install_package(runner: &dyn CommandRunner, venv: &Venv, package: &str) -> Result<()> {
    let installed = listing::installed_set(runner, venv)?;
    if installed.contains(&package.to_lowercase()) {
        output::info(&format!("{package} is already installed (skipping)"));
        return Ok(());
    }

    output::info(&format!("Installing: {package}..."));
    let progress = TaskProgress::counter(&format!("Installing {package}"));
    let mut last_seen: Option<String> = None;

    let result = runner.run_streaming(
        &venv.python_path(),
        &["-m", "pip", "install", package],
        &mut |line| {
            if let Some(pkg) = markers::collecting_package(line) {
                progress.set_label(&format!("Installing: {pkg}"));
                progress.inc(1);
                last_seen = Some(pkg);
            }
        },
    )?;

    // pip may print no Collecting line at all (cached wheel, direct URL);
    // fall back to the name the user asked for.
    let label = last_seen.unwrap_or_else(|| package.to_string());
    if result.success {
        progress.finish_success(&format!("Installed {label}"));
    } else {
        progress.finish_error(&format!(
            "Installing {label} failed ({})",
            describe_exit(result.exit_code)
        ));
    }
    Ok(())
}

/// Install from a requirements file.
///
/// Already-installed entries are logged and left to pip: when anything
/// remains to install, a single batch `pip install -r` covers the whole
/// original file so pip resolves all constraints itself.
pub fn install_from_manifest(runner: &dyn CommandRunner, venv: &Venv, path: &Path) -> Result<()> {
    let packages = manifest::read_packages(path)?;
    if packages.is_empty() {
        output::info(&format!("No valid packages found in {}.", path.display()));
        return Ok(());
    }

    output::info("Checking for installed packages before installation...");
    let installed = listing::installed_set(runner, venv)?;
    let (already, to_install): (Vec<&String>, Vec<&String>) = packages
        .iter()
        .partition(|pkg| installed.contains(&pkg.to_lowercase()));

    for pkg in &already {
        output::info(&format!("{pkg} is already installed (skipping)"));
    }
    if to_install.is_empty() {
        output::info("All required packages are already installed. Nothing to install.");
        return Ok(());
    }

    output::info(&format!(
        "Installing {} packages from '{}'...",
        to_install.len(),
        path.display()
    ));

    let path_arg = path.to_string_lossy().into_owned();
    let progress = TaskProgress::counter("Installing packages");

    let result = runner.run_streaming(
        &venv.python_path(),
        &["-m", "pip", "install", "-r", path_arg.as_str()],
        &mut |line| {
            if let Some(pkg) = markers::collecting_package(line) {
                progress.set_label(&format!("Installing: {pkg}"));
            }
            // One tick per output line: approximate progress by contract.
            progress.inc(1);
        },
    )?;

    if result.success {
        progress.finish_success("Installation process complete.");
    } else {
        progress.finish_error(&format!(
            "Installation failed ({})",
            describe_exit(result.exit_code)
        ));
    }
    Ok(())
}
