//! Package removal.
//!
//! Uninstalls run with `-y` so pip never prompts. Unlike the progress bars,
//! which advance per package regardless of outcome, exit codes are checked
//! and failures reported.

use crate::error::Result;
use crate::pip::{listing, markers};
use crate::shell::{command::describe_exit, CommandRunner};
use crate::ui::{output, TaskProgress};
use crate::venv::Venv;

/// Remove a single package. Returns whether the uninstall succeeded.
pub fn remove_package(runner: &dyn CommandRunner, venv: &Venv, package: &str) -> Result<bool> {
    output::info(&format!("Removing package: {package}..."));
    let progress = TaskProgress::sized(&format!("Removing {package}"), 1);

    let ok = uninstall_one(runner, venv, package, &progress)?;
    progress.inc(1);

    if ok {
        progress.finish_success(&format!("Package '{package}' removed."));
    } else {
        progress.finish_error(&format!("Removal of '{package}' failed"));
    }
    Ok(ok)
}

/// Remove every installed package, one uninstall subprocess per package.
pub fn remove_all(runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    output::info("Removing all installed packages...");
    let packages = listing::frozen(runner, venv)?;
    if packages.is_empty() {
        output::info("No packages to remove.");
        return Ok(());
    }

    let progress = TaskProgress::sized("Removing packages", packages.len() as u64);
    let mut failures = 0usize;

    for package in &packages {
        if !uninstall_one(runner, venv, package, &progress)? {
            failures += 1;
        }
        // The overall bar advances per package, success or not.
        progress.inc(1);
    }

    if failures == 0 {
        progress.finish_success("All packages removed.");
    } else {
        progress.finish_error(&format!(
            "{failures} of {} removals failed",
            packages.len()
        ));
    }
    Ok(())
}

fn uninstall_one(
    runner: &dyn CommandRunner,
    venv: &Venv,
    package: &str,
    progress: &TaskProgress,
) -> Result<bool> {
    let result = runner.run_streaming(
        &venv.python_path(),
        &["-m", "pip", "uninstall", "-y", package],
        &mut |line| {
            if let Some(pkg) = markers::uninstalling_package(line) {
                progress.set_label(&format!("Removing: {pkg}"));
            }
        },
    )?;

    if !result.success {
        output::warn(&format!(
            "Uninstall of {package} failed ({})",
            describe_exit(result.exit_code)
        ));
    }
    Ok(result.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn remove_issues_autoconfirmed_uninstall() {
        let runner = MockRunner::new().respond(
            &["uninstall", "requests"],
            0,
            "Found existing installation: requests 2.31.0\nUninstalling requests-2.31.0:\n",
        );
        let venv = Venv::new("env");

        assert!(remove_package(&runner, &venv, "requests").unwrap());
        assert_eq!(runner.calls_matching(&["uninstall", "-y", "requests"]), 1);
    }

    #[test]
    fn remove_reports_failure_via_exit_code() {
        let runner = MockRunner::new().respond(&["uninstall"], 1, "");
        let venv = Venv::new("env");

        assert!(!remove_package(&runner, &venv, "ghost").unwrap());
    }

    #[test]
    fn remove_all_uninstalls_each_frozen_package() {
        let runner = MockRunner::new().respond(&["freeze"], 0, "alpha==1.0\nbeta==2.0\n");
        let venv = Venv::new("env");

        remove_all(&runner, &venv).unwrap();

        assert_eq!(runner.calls_matching(&["uninstall", "-y", "alpha"]), 1);
        assert_eq!(runner.calls_matching(&["uninstall", "-y", "beta"]), 1);
    }

    #[test]
    fn remove_all_with_empty_freeze_is_a_no_op() {
        let runner = MockRunner::new().respond(&["freeze"], 0, "");
        let venv = Venv::new("env");

        remove_all(&runner, &venv).unwrap();

        assert_eq!(runner.calls_matching(&["uninstall"]), 0);
    }

    #[test]
    fn remove_all_continues_past_individual_failures() {
        let runner = MockRunner::new()
            .respond(&["freeze"], 0, "alpha==1.0\nbeta==2.0\n")
            .respond(&["uninstall", "-y", "alpha"], 1, "");
        let venv = Venv::new("env");

        remove_all(&runner, &venv).unwrap();

        // beta is still attempted after alpha fails.
        assert_eq!(runner.calls_matching(&["uninstall", "-y", "beta"]), 1);
    }
}
